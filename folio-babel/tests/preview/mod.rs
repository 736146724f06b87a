mod file_host;
mod lifecycle;

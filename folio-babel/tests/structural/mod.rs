mod code;
mod export;
mod lists;

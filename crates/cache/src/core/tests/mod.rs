mod advanced;
mod basic;

mod others;
mod rows;

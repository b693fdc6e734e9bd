mod common;
mod intake;
mod labels;

pub mod config;
mod print_tensor;

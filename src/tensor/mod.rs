mod buffer;
pub use buffer::Buffer;
mod cursor;
pub use cursor::Cursor;
mod desc;
pub use desc::TensorDesc;
mod tensor;
pub use tensor::Tensor;

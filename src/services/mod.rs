pub mod openai;
pub mod relay;
pub mod upstream;

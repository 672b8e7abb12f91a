pub mod openai_compatible;

pub use openai_compatible::{
    OpenAICompatible, OpenAICompatibleBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL,
};

mod groq_client;

pub use groq_client::{GroqClient, create_groq_client};

pub mod hugging_face_client;

pub use hugging_face_client::HuggingFaceClient;

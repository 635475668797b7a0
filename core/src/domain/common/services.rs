use crate::domain::recommendation::ports::InferenceClient;

/// Application service wiring the domain logic to its outbound ports.
#[derive(Clone)]
pub struct Service<IC>
where
    IC: InferenceClient,
{
    pub(crate) inference_client: IC,
}

impl<IC> Service<IC>
where
    IC: InferenceClient,
{
    pub fn new(inference_client: IC) -> Self {
        Self { inference_client }
    }
}

use crate::{
    domain::common::{NutriplanConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::HuggingFaceClient,
};

pub type NutriplanService = Service<HuggingFaceClient>;

pub fn create_service(config: NutriplanConfig) -> Result<NutriplanService, CoreError> {
    let inference_client = HuggingFaceClient::new(config.inference)?;

    Ok(Service::new(inference_client))
}

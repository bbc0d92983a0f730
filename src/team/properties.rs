//! Team-owned property templates.

use super::routes;
use super::TeamApi;
use crate::client::CallResult;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertyType {
    String,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyFieldTemplate {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: PropertyType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPropertyTemplateArg {
    pub name: String,
    pub description: String,
    pub fields: Vec<PropertyFieldTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AddPropertyTemplateResult {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPropertyTemplateArg {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetPropertyTemplateResult {
    pub name: String,
    pub description: String,
    pub fields: Vec<PropertyFieldTemplate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListPropertyTemplateIds {
    pub template_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePropertyTemplateArg {
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_fields: Option<Vec<PropertyFieldTemplate>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdatePropertyTemplateResult {
    pub template_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum PropertyTemplateError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = ".tag", rename_all = "snake_case")]
pub enum ModifyPropertyTemplateError {
    TemplateNotFound { template_not_found: String },
    RestrictedContent,
    Other,
    ConflictingPropertyNames,
    TooManyProperties,
    TooManyTemplates,
    TemplateAttributeTooLarge,
}

impl<'c> TeamApi<'c> {
    pub async fn properties_template_add(
        &self,
        arg: &AddPropertyTemplateArg,
    ) -> CallResult<AddPropertyTemplateResult, ModifyPropertyTemplateError> {
        self.client.call(&routes::PROPERTIES_TEMPLATE_ADD, arg).await
    }

    pub async fn properties_template_get(
        &self,
        arg: &GetPropertyTemplateArg,
    ) -> CallResult<GetPropertyTemplateResult, PropertyTemplateError> {
        self.client.call(&routes::PROPERTIES_TEMPLATE_GET, arg).await
    }

    /// Sends no request body.
    pub async fn properties_template_list(&self) -> CallResult<ListPropertyTemplateIds, PropertyTemplateError> {
        self.client.call(&routes::PROPERTIES_TEMPLATE_LIST, &()).await
    }

    pub async fn properties_template_update(
        &self,
        arg: &UpdatePropertyTemplateArg,
    ) -> CallResult<UpdatePropertyTemplateResult, ModifyPropertyTemplateError> {
        self.client.call(&routes::PROPERTIES_TEMPLATE_UPDATE, arg).await
    }
}

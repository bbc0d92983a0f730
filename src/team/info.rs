use super::routes;
use super::TeamApi;
use crate::client::CallResult;
use crate::error::NoRouteError;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TeamGetInfoResult {
    pub name: String,
    pub team_id: String,
    pub num_licensed_users: u32,
    pub num_provisioned_users: u32,
}

impl<'c> TeamApi<'c> {
    /// Team name, id and license counts. Sends no request body.
    pub async fn get_info(&self) -> CallResult<TeamGetInfoResult, NoRouteError> {
        self.client.call(&routes::GET_INFO, &()).await
    }
}

use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::models::{Group, RosterEntry};
use crate::session::Session;

#[derive(Deserialize)]
struct GroupsResponse {
    #[serde(default)]
    groups: Vec<Group>,
}

#[derive(Deserialize)]
struct RosterResponse {
    #[serde(default)]
    roster: Vec<RosterEntry>,
}

impl ApiClient {
    pub async fn list_groups(&self, session: &Session) -> Result<Vec<Group>, ClientError> {
        let resp: GroupsResponse = self.get("listGroups", Some(&session.token), &[]).await?;
        Ok(resp.groups)
    }

    /// Roster for one group, in the backend's enrollment order.
    pub async fn get_roster(
        &self,
        session: &Session,
        group_code: &str,
    ) -> Result<Vec<RosterEntry>, ClientError> {
        let resp: RosterResponse = self
            .get(
                "getRoster",
                Some(&session.token),
                &[("group_code", group_code.to_string())],
            )
            .await?;
        Ok(resp.roster)
    }
}

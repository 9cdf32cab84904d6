use crate::coerce::{coerce_many, coerce_single};
use crate::models::{Group, GroupMember};
use crate::response::normalize;
use crate::transport::HttpTransport;
use crate::{Ack, Result};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;

/// Group management operations.
///
/// Mutating calls return the gateway's view of the group where it sends one;
/// fields the gateway omits are backfilled from the request context so the
/// caller always gets a usable entity.
pub struct GroupsModule {
    transport: Arc<HttpTransport>,
}

impl GroupsModule {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get_groups(&self, number: &str) -> Result<Vec<Group>> {
        let payload = self
            .transport
            .execute(Method::GET, &format!("/v1/groups/{number}"), None, None)
            .await?;
        Ok(coerce_many(normalize(payload, Some("groups"))))
    }

    pub async fn get_group(&self, number: &str, group_id: &str) -> Result<Group> {
        let payload = self
            .transport
            .execute(
                Method::GET,
                &format!("/v1/groups/{number}/{group_id}"),
                None,
                None,
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.id.is_empty() {
            group.id = group_id.to_string();
        }
        Ok(group)
    }

    pub async fn create_group(
        &self,
        number: &str,
        name: &str,
        members: &[&str],
        avatar: Option<&str>,
    ) -> Result<Group> {
        let mut body = json!({ "name": name, "members": members });
        if let Some(avatar) = avatar {
            body["avatar"] = json!(avatar);
        }
        let payload = self
            .transport
            .execute(
                Method::POST,
                &format!("/v1/groups/{number}"),
                None,
                Some(&body),
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.name.is_none() {
            group.name = Some(name.to_string());
        }
        if group.members.is_empty() {
            group.members = members
                .iter()
                .map(|member| GroupMember {
                    number: Some((*member).to_string()),
                    ..Default::default()
                })
                .collect();
        }
        Ok(group)
    }

    pub async fn update_group(
        &self,
        number: &str,
        group_id: &str,
        name: Option<&str>,
        description: Option<&str>,
        avatar: Option<&str>,
    ) -> Result<Group> {
        let mut body = json!({});
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        if let Some(description) = description {
            body["description"] = json!(description);
        }
        if let Some(avatar) = avatar {
            body["avatar"] = json!(avatar);
        }
        let payload = self
            .transport
            .execute(
                Method::PUT,
                &format!("/v1/groups/{number}/{group_id}"),
                None,
                Some(&body),
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.id.is_empty() {
            group.id = group_id.to_string();
        }
        if group.name.is_none() {
            group.name = name.map(|s| s.to_string());
        }
        if group.description.is_none() {
            group.description = description.map(|s| s.to_string());
        }
        if group.avatar.is_none() {
            group.avatar = avatar.map(|s| s.to_string());
        }
        Ok(group)
    }

    pub async fn delete_group(&self, number: &str, group_id: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::DELETE,
                &format!("/v1/groups/{number}/{group_id}"),
                None,
                None,
            )
            .await
    }

    pub async fn add_members(
        &self,
        number: &str,
        group_id: &str,
        members: &[&str],
    ) -> Result<Group> {
        let body = json!({ "members": members });
        let payload = self
            .transport
            .execute(
                Method::POST,
                &format!("/v1/groups/{number}/{group_id}/members"),
                None,
                Some(&body),
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.id.is_empty() {
            group.id = group_id.to_string();
        }
        Ok(group)
    }

    pub async fn remove_members(
        &self,
        number: &str,
        group_id: &str,
        members: &[&str],
    ) -> Result<Group> {
        let body = json!({ "members": members });
        let payload = self
            .transport
            .execute(
                Method::DELETE,
                &format!("/v1/groups/{number}/{group_id}/members"),
                None,
                Some(&body),
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.id.is_empty() {
            group.id = group_id.to_string();
        }
        Ok(group)
    }

    pub async fn join_group(&self, number: &str, group_id: &str) -> Result<Group> {
        let payload = self
            .transport
            .execute(
                Method::POST,
                &format!("/v1/groups/{number}/{group_id}/join"),
                None,
                None,
            )
            .await?;
        let mut group: Group = coerce_single(normalize(payload, None));
        if group.id.is_empty() {
            group.id = group_id.to_string();
        }
        Ok(group)
    }

    pub async fn leave_group(&self, number: &str, group_id: &str) -> Result<Ack> {
        self.transport
            .execute(
                Method::POST,
                &format!("/v1/groups/{number}/{group_id}/leave"),
                None,
                None,
            )
            .await
    }
}

//! Async surface over `HakushClient` and a `Transport`.
//!
//! # Design
//! `HakushSession` owns one transport for its whole lifetime and holds no
//! other state. Every operation builds its request, awaits one GET and
//! parses the response, so operations borrow `&self` and may run
//! concurrently. The only dependent request is `relicset_icon` given a bare
//! id, which fetches the set first to learn its icon path.
//!
//! The transport is released by `close` or, on any other exit path, when
//! the session is dropped.

use std::collections::BTreeMap;

use crate::client::HakushClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, Transport};
use crate::id::{RelicSetRef, ResourceId};
use crate::schema::{
    AchievementSeries, Avatar, BriefAvatar, BriefItem, BriefLightcone, BriefMonster, BriefRelicSet,
    Changelog, Item, Lightcone, MonsterTemplate, RelicSet, Schema,
};

#[derive(Debug)]
pub struct HakushSession<T> {
    client: HakushClient,
    transport: T,
}

#[cfg(feature = "reqwest-client")]
impl HakushSession<crate::transport::ReqwestTransport> {
    /// Open a session against the public origin with default settings.
    pub fn open() -> Result<Self, ApiError> {
        Self::with_config(&crate::config::ClientConfig::default())
    }

    pub fn with_config(config: &crate::config::ClientConfig) -> Result<Self, ApiError> {
        let transport = crate::transport::ReqwestTransport::new(config)?;
        Ok(Self::new(HakushClient::from_config(config), transport))
    }
}

impl<T: Transport> HakushSession<T> {
    pub fn new(client: HakushClient, transport: T) -> Self {
        tracing::debug!(origin = client.base_url(), language = %client.language(), "session opened");
        Self { client, transport }
    }

    pub fn client(&self) -> &HakushClient {
        &self.client
    }

    /// Release the transport.
    pub fn close(self) {
        tracing::debug!(origin = self.client.base_url(), "session closed");
    }

    async fn json<R: Schema>(&self, request: HttpRequest) -> Result<R, ApiError> {
        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.get(request).await?;
        self.client.parse_json(response)
    }

    async fn index<R: Schema>(&self, request: HttpRequest) -> Result<BTreeMap<u32, R>, ApiError> {
        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.get(request).await?;
        self.client.parse_index(response)
    }

    async fn bytes(&self, request: HttpRequest) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(url = %request.url, "GET");
        let response = self.transport.get(request).await?;
        self.client.parse_bytes(response)
    }

    pub async fn changelog(&self) -> Result<Changelog, ApiError> {
        self.json(self.client.build_changelog()).await
    }

    pub async fn avatar_index(&self) -> Result<BTreeMap<u32, BriefAvatar>, ApiError> {
        self.index(self.client.build_avatar_index()).await
    }

    pub async fn avatar(&self, id: impl Into<ResourceId>) -> Result<Avatar, ApiError> {
        let request = self.client.build_avatar(&id.into())?;
        self.json(request).await
    }

    pub async fn lightcone_index(&self) -> Result<BTreeMap<u32, BriefLightcone>, ApiError> {
        self.index(self.client.build_lightcone_index()).await
    }

    pub async fn lightcone(&self, id: impl Into<ResourceId>) -> Result<Lightcone, ApiError> {
        let request = self.client.build_lightcone(&id.into())?;
        self.json(request).await
    }

    pub async fn relicset_index(&self) -> Result<BTreeMap<u32, BriefRelicSet>, ApiError> {
        self.index(self.client.build_relicset_index()).await
    }

    pub async fn relicset(&self, id: impl Into<ResourceId>) -> Result<RelicSet, ApiError> {
        let request = self.client.build_relicset(&id.into())?;
        self.json(request).await
    }

    pub async fn achievement_index(&self) -> Result<BTreeMap<u32, AchievementSeries>, ApiError> {
        self.index(self.client.build_achievement_index()).await
    }

    pub async fn item_index(&self) -> Result<BTreeMap<u32, BriefItem>, ApiError> {
        self.index(self.client.build_item_index()).await
    }

    pub async fn item(&self, id: impl Into<ResourceId>) -> Result<Item, ApiError> {
        let request = self.client.build_item(&id.into())?;
        self.json(request).await
    }

    pub async fn monster_index(&self) -> Result<BTreeMap<u32, BriefMonster>, ApiError> {
        self.index(self.client.build_monster_index()).await
    }

    pub async fn monster_template(&self, id: impl Into<ResourceId>) -> Result<MonsterTemplate, ApiError> {
        let request = self.client.build_monster_template(&id.into())?;
        self.json(request).await
    }

    pub async fn avatar_icon(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_avatar_icon(&id.into())?;
        self.bytes(request).await
    }

    pub async fn avatar_icon_shop(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_avatar_icon_shop(&id.into())?;
        self.bytes(request).await
    }

    pub async fn avatar_image(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_avatar_image(&id.into())?;
        self.bytes(request).await
    }

    /// Eidolon artwork; `id` is avatar id and rank, e.g. `121204`.
    pub async fn avatar_rank_image(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_avatar_rank_image(&id.into())?;
        self.bytes(request).await
    }

    pub async fn lightcone_icon_medium(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_lightcone_icon_medium(&id.into())?;
        self.bytes(request).await
    }

    pub async fn lightcone_image(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_lightcone_image(&id.into())?;
        self.bytes(request).await
    }

    /// Relic set artwork. A bare id costs an extra request for the set
    /// document; a brief or full record is used as is.
    pub async fn relicset_icon<'a>(&self, set: impl Into<RelicSetRef<'a>>) -> Result<Vec<u8>, ApiError> {
        let request = match set.into() {
            RelicSetRef::Id(id) => {
                let full = self.relicset(id).await?;
                self.client.build_relicset_icon(&full.icon)?
            }
            RelicSetRef::Brief(set) => self.client.build_relicset_icon(&set.icon)?,
            RelicSetRef::Full(set) => self.client.build_relicset_icon(&set.icon)?,
        };
        self.bytes(request).await
    }

    /// Relic piece artwork; `id` is type, set and slot, e.g. `31011`.
    pub async fn relic_icon(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_relic_icon(&id.into())?;
        self.bytes(request).await
    }

    pub async fn item_icon(&self, id: impl Into<ResourceId>) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_item_icon(&id.into())?;
        self.bytes(request).await
    }

    /// Path icon, e.g. `rogue`.
    pub async fn profession_icon(&self, name: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_profession_icon(name)?;
        self.bytes(request).await
    }

    /// Element icon, e.g. `quantum`.
    pub async fn attribute_icon(&self, name: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_attribute_icon(name)?;
        self.bytes(request).await
    }

    /// Stat icon, e.g. `MaxHP`.
    pub async fn status_icon(&self, name: &str) -> Result<Vec<u8>, ApiError> {
        let request = self.client.build_status_icon(name)?;
        self.bytes(request).await
    }
}

//! Stateless request builder and response parser for the Hakush API.
//!
//! # Design
//! `HakushClient` holds only the origin and content language and carries no
//! mutable state between calls. Each operation has a `build_*` method that
//! produces an `HttpRequest`; responses go through one of three generic
//! parsers depending on what the endpoint serves (a single document, an
//! index keyed by id, or raw asset bytes). The caller, usually
//! `HakushSession`, executes the round-trip in between.

use std::collections::BTreeMap;

use crate::config::{ClientConfig, Language};
use crate::error::{ApiError, IdError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::id::{asset_name, icon_figure_id, RankImageId, RelicPieceId, ResourceId};
use crate::schema::{self, Schema};

/// Stateless request builder and response parser for one origin.
///
/// Holds no connection; pair it with a `Transport` (or use `HakushSession`)
/// to actually perform requests.
#[derive(Debug, Clone)]
pub struct HakushClient {
    base_url: String,
    language: Language,
}

impl HakushClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            language: Language::default(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.origin).with_language(config.language)
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn request(&self, path: String) -> HttpRequest {
        HttpRequest {
            url: format!("{}{path}", self.base_url),
            path,
            headers: Vec::new(),
        }
    }

    fn json_request(&self, path: String) -> HttpRequest {
        let mut request = self.request(path);
        request
            .headers
            .push(("accept".to_string(), "application/json".to_string()));
        request
    }

    fn detail(&self, kind: &str, id: &ResourceId) -> Result<HttpRequest, IdError> {
        let id = id.to_segment()?;
        Ok(self.json_request(format!("/hsr/data/{}/{kind}/{id}.json", self.language)))
    }

    fn asset(&self, dir: &str, id: &ResourceId) -> Result<HttpRequest, IdError> {
        let id = id.to_segment()?;
        Ok(self.request(format!("/hsr/UI/{dir}/{id}.webp")))
    }

    // -- indexes ------------------------------------------------------------

    pub fn build_changelog(&self) -> HttpRequest {
        self.json_request("/hsr/new.json".to_string())
    }

    pub fn build_avatar_index(&self) -> HttpRequest {
        self.json_request("/hsr/data/character.json".to_string())
    }

    pub fn build_lightcone_index(&self) -> HttpRequest {
        self.json_request("/hsr/data/lightcone.json".to_string())
    }

    pub fn build_relicset_index(&self) -> HttpRequest {
        self.json_request("/hsr/data/relicset.json".to_string())
    }

    pub fn build_achievement_index(&self) -> HttpRequest {
        self.json_request(format!("/hsr/live/{}/achievement/achievement.json", self.language))
    }

    pub fn build_item_index(&self) -> HttpRequest {
        self.json_request(format!("/hsr/data/{}/item.json", self.language))
    }

    pub fn build_monster_index(&self) -> HttpRequest {
        self.json_request("/hsr/data/monster.json".to_string())
    }

    // -- details ------------------------------------------------------------

    pub fn build_avatar(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.detail("character", id)
    }

    pub fn build_lightcone(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.detail("lightcone", id)
    }

    pub fn build_relicset(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.detail("relicset", id)
    }

    pub fn build_item(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.detail("item", id)
    }

    pub fn build_monster_template(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.detail("monster", id)
    }

    // -- assets -------------------------------------------------------------

    pub fn build_avatar_icon(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("avatarroundicon", id)
    }

    pub fn build_avatar_icon_shop(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("avatarshopicon", id)
    }

    pub fn build_avatar_image(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("avatardrawcard", id)
    }

    /// Eidolon artwork for a composite rank id such as `121204`.
    pub fn build_avatar_rank_image(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        let rank = RankImageId::try_from(id)?;
        Ok(self.request(rank.path()))
    }

    pub fn build_lightcone_icon_medium(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("lightconemediumicon", id)
    }

    pub fn build_lightcone_image(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("lightconemaxfigures", id)
    }

    /// Relic set artwork, from the set's `icon` path.
    pub fn build_relicset_icon(&self, icon: &str) -> Result<HttpRequest, IdError> {
        let figure = icon_figure_id(icon)?;
        Ok(self.request(format!("/hsr/UI/itemfigures/{figure}.webp")))
    }

    /// Relic piece artwork for a composite piece id such as `31011`.
    pub fn build_relic_icon(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        let piece = RelicPieceId::try_from(id)?;
        Ok(self.request(piece.path()))
    }

    pub fn build_item_icon(&self, id: &ResourceId) -> Result<HttpRequest, IdError> {
        self.asset("itemfigures", id)
    }

    /// Path icon. Names are lowercased (`Rogue` becomes `rogue`).
    pub fn build_profession_icon(&self, name: &str) -> Result<HttpRequest, IdError> {
        let name = asset_name(name)?.to_ascii_lowercase();
        Ok(self.request(format!("/hsr/UI/pathicon/{name}.webp")))
    }

    /// Element icon. Names are lowercased (`Quantum` becomes `quantum`).
    pub fn build_attribute_icon(&self, name: &str) -> Result<HttpRequest, IdError> {
        let name = asset_name(name)?.to_ascii_lowercase();
        Ok(self.request(format!("/hsr/UI/element/{name}.webp")))
    }

    /// Stat icon. Case is significant (`MaxHP`).
    pub fn build_status_icon(&self, name: &str) -> Result<HttpRequest, IdError> {
        let name = asset_name(name)?;
        Ok(self.request(format!("/hsr/UI/trace/Icon{name}.webp")))
    }

    // -- parsing ------------------------------------------------------------

    /// Parse a single document as `T`.
    pub fn parse_json<T: Schema>(&self, response: HttpResponse) -> Result<T, ApiError> {
        check_status(&response)?;
        Ok(schema::parse_slice(&response.body)?)
    }

    /// Parse an index document keyed by entity id.
    pub fn parse_index<T: Schema>(&self, response: HttpResponse) -> Result<BTreeMap<u32, T>, ApiError> {
        check_status(&response)?;
        let value = schema::to_value(T::ENTITY, &response.body)?;
        Ok(schema::parse_index(&value)?)
    }

    /// Return an asset body untouched.
    pub fn parse_bytes(&self, response: HttpResponse) -> Result<Vec<u8>, ApiError> {
        check_status(&response)?;
        Ok(response.body)
    }
}

/// Map any non-2xx status to `TransportError`.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    tracing::warn!(status = response.status, url = %response.url, "request failed");
    Err(TransportError {
        status: response.status,
        reason: response.reason.clone(),
        url: response.url.clone(),
    })
}

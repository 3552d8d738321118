use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::fan::{Fan, FanId};
use crate::performance::{CurveError, PerformanceCurve};

/// 카탈로그 로드/편집 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 파일 입출력 오류
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 파싱 오류 (곡선 검증 실패 포함)
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("중복된 팬 ID: {0}")]
    DuplicateId(FanId),
    #[error("팬을 찾을 수 없습니다: {0}")]
    NotFound(FanId),
    #[error("성능 곡선 오류: {0}")]
    Curve(#[from] CurveError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    fans: Vec<Fan>,
}

/// 메모리 위의 팬 목록. 파일에서 읽기만 하고 다시 쓰지 않는다.
#[derive(Debug, Clone, Default)]
pub struct FanCatalog {
    fans: Vec<Fan>,
}

impl FanCatalog {
    pub fn from_fans(fans: Vec<Fan>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for fan in &fans {
            if !seen.insert(fan.id) {
                tracing::warn!(id = fan.id.0, "duplicate fan id in catalog");
                return Err(CatalogError::DuplicateId(fan.id));
            }
        }
        Ok(Self { fans })
    }

    /// `[[fans]]` 테이블 배열 형식의 TOML 문자열을 읽는다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::from_fans(file.fans)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(path = %path.display(), fans = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// 바이너리에 포함된 데모 카탈로그.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(include_str!("../../data/fans.toml"))
    }

    pub fn fans(&self) -> &[Fan] {
        &self.fans
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fan> {
        self.fans.iter()
    }

    pub fn len(&self) -> usize {
        self.fans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fans.is_empty()
    }

    pub fn get(&self, id: FanId) -> Option<&Fan> {
        self.fans.iter().find(|f| f.id == id)
    }

    fn next_id(&self) -> FanId {
        let max = self.fans.iter().map(|f| f.id.0).max().unwrap_or(0);
        FanId(max + 1)
    }

    /// 팬을 추가한다. 전달된 `id`는 무시하고 새 번호를 부여한다.
    pub fn add(&mut self, mut fan: Fan) -> FanId {
        let id = self.next_id();
        fan.id = id;
        tracing::info!(id = id.0, model = %fan.model, "fan added");
        self.fans.push(fan);
        id
    }

    /// 같은 `id`의 팬을 통째로 교체한다.
    pub fn update(&mut self, fan: Fan) -> Result<(), CatalogError> {
        let slot = self
            .fans
            .iter_mut()
            .find(|f| f.id == fan.id)
            .ok_or(CatalogError::NotFound(fan.id))?;
        tracing::info!(id = fan.id.0, "fan updated");
        *slot = fan;
        Ok(())
    }

    /// 성능 곡선을 편집한다. `edit`이 만든 새 곡선으로 교체하며, 실패하면 기존 곡선을 유지한다.
    pub fn edit_curve<F>(&mut self, id: FanId, edit: F) -> Result<(), CatalogError>
    where
        F: FnOnce(&PerformanceCurve) -> Result<PerformanceCurve, CurveError>,
    {
        let fan = self
            .fans
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        fan.performance_curve = edit(&fan.performance_curve)?;
        tracing::debug!(id = id.0, points = fan.performance_curve.len(), "curve edited");
        Ok(())
    }

    pub fn remove(&mut self, id: FanId) -> Result<Fan, CatalogError> {
        let index = self
            .fans
            .iter()
            .position(|f| f.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        tracing::info!(id = id.0, "fan removed");
        Ok(self.fans.remove(index))
    }
}

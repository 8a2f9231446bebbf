//! 구성된 소셜 프로바이더 애플리케이션 목록
//!
//! `<PROVIDER>_CLIENT_ID`가 설정된 프로바이더만 등록됩니다.

use std::collections::HashMap;
use crate::{
    config::{AuthProvider, SocialProviderConfig},
    domain::entities::social::SocialApp,
    repositories::stores::SocialAppStore,
};

const SOCIAL_PROVIDERS: [AuthProvider; 2] = [AuthProvider::Google, AuthProvider::Facebook];

#[derive(Debug, Clone, Default)]
pub struct SocialAppRegistry {
    apps: HashMap<AuthProvider, SocialApp>,
}

impl SocialAppRegistry {
    /// 환경 변수에서 프로바이더 애플리케이션을 읽습니다.
    pub fn from_env() -> Self {
        let apps = SOCIAL_PROVIDERS
            .iter()
            .filter_map(|&provider| {
                let client_id = SocialProviderConfig::client_id(provider)?;
                Some(SocialApp::new(provider, client_id, SocialProviderConfig::client_secret(provider)))
            })
            .collect::<Vec<_>>();

        for app in &apps {
            log::info!("🔐 소셜 프로바이더 구성됨: {}", app.name);
        }

        Self::from_apps(apps)
    }

    /// 소셜 프로바이더가 아닌 애플리케이션(`Local`)은 등록하지 않습니다.
    pub fn from_apps(apps: impl IntoIterator<Item = SocialApp>) -> Self {
        Self {
            apps: apps
                .into_iter()
                .filter(|app| {
                    if !app.provider.is_social() {
                        log::warn!("소셜 프로바이더가 아닌 애플리케이션 무시: {}", app.name);
                    }
                    app.provider.is_social()
                })
                .map(|app| (app.provider, app))
                .collect(),
        }
    }

    pub fn configured_providers(&self) -> Vec<AuthProvider> {
        SOCIAL_PROVIDERS
            .into_iter()
            .filter(|provider| self.apps.contains_key(provider))
            .collect()
    }
}

impl SocialAppStore for SocialAppRegistry {
    fn find_by_provider(&self, provider: AuthProvider) -> Option<SocialApp> {
        self.apps.get(&provider).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_only_finds_configured_apps() {
        let registry = SocialAppRegistry::from_apps([SocialApp::new(AuthProvider::Google, "google-client", None)]);

        let app = registry.find_by_provider(AuthProvider::Google).unwrap();
        assert_eq!(app.client_id, "google-client");
        assert!(registry.find_by_provider(AuthProvider::Facebook).is_none());
        assert!(registry.find_by_provider(AuthProvider::Local).is_none());
        assert_eq!(registry.configured_providers(), vec![AuthProvider::Google]);
    }

    #[test]
    fn test_local_provider_is_never_registered() {
        let registry = SocialAppRegistry::from_apps([
            SocialApp::new(AuthProvider::Local, "local-client", None),
            SocialApp::new(AuthProvider::Facebook, "facebook-client", None),
        ]);

        assert!(registry.find_by_provider(AuthProvider::Local).is_none());
        assert_eq!(registry.configured_providers(), vec![AuthProvider::Facebook]);
    }
}

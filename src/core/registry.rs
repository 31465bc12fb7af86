//! # Service Registry
//!
//! 프로세스 전역에서 공유되는 읽기 전용 컴포넌트(데이터베이스 핸들, 로그인 플로우 등)를
//! 타입 기준으로 보관하는 단순한 레지스트리입니다.
//!
//! ## 동작 방식
//!
//! ```text
//! main()
//!    ├─ Database::new()                      → ServiceLocator::set(Arc<Database>)
//!    ├─ GoogleSdkLoginFlowService::from_env() → ServiceLocator::set(Arc<...>)
//!    └─ HttpServer::new(...)
//!
//! handler
//!    └─ ServiceLocator::get::<GoogleSdkLoginFlowService>()  → Arc 복제본
//! ```
//!
//! `dyn Trait` 타입으로도 등록할 수 있습니다. 핸들러가 구현체 대신 트레이트로 조회하면
//! 테스트에서 다른 구현을 끼워 넣을 수 있습니다.
//!
//! 모든 등록은 서버가 요청을 받기 전에 끝납니다. 이후에는 읽기만 발생하므로
//! 락 경합은 사실상 없습니다.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::errors::AppError;

/// 타입 기반 싱글톤 컨테이너
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
});

impl ServiceLocator {
    /// 인스턴스를 등록합니다. 같은 타입이 이미 있으면 교체합니다.
    pub fn set<T: ?Sized + 'static + Send + Sync>(instance: Arc<T>) {
        log::info!("📦 Registering: {}", Self::clean_type_name::<T>());

        let mut instances = LOCATOR
            .instances
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        instances.insert(TypeId::of::<T>(), Box::new(instance));
    }

    /// 등록된 인스턴스를 조회합니다.
    pub fn try_get<T: ?Sized + 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = LOCATOR
            .instances
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        instances
            .get(&TypeId::of::<T>())
            .and_then(|instance| instance.downcast_ref::<Arc<T>>())
            .cloned()
    }

    /// 등록된 인스턴스를 조회하고, 없으면 `InternalError`를 반환합니다.
    pub fn get<T: ?Sized + 'static + Send + Sync>() -> Result<Arc<T>, AppError> {
        Self::try_get::<T>().ok_or_else(|| {
            AppError::InternalError(format!(
                "{} is not registered in ServiceLocator",
                Self::clean_type_name::<T>()
            ))
        })
    }

    fn clean_type_name<T: ?Sized>() -> &'static str {
        let type_name = std::any::type_name::<T>();
        type_name.rsplit("::").next().unwrap_or(type_name)
    }
}

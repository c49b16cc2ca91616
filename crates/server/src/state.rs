use crate::di::DependenciesInject;
use anyhow::Result;
use shared::config::ConnectionPool;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(db: ConnectionPool) -> Result<Self> {
        let di_container = DependenciesInject::new(db);

        Ok(Self { di_container })
    }
}

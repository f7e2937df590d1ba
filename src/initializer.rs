use crate::domain::service;
use crate::infra;
use crate::repository;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Config {
    pub ids_path: PathBuf,
    pub archive_path: PathBuf,
    pub failed_path: PathBuf,
    pub concurrency: usize,
}

#[derive(Clone)]
pub struct Infras {
    pub store: infra::JsonStore,
    pub http_client: Arc<infra::HttpClient>,
}

pub fn infras() -> Infras {
    let store = infra::JsonStore::new();
    let http_client = Arc::new(infra::HttpClient::new());
    Infras { store, http_client }
}

#[derive(Clone)]
pub struct Repository {
    pub tweet: Arc<repository::TweetRepository>,
}

pub fn repository(infras: &Infras, config: &Config) -> Repository {
    let tweet = Arc::new(repository::TweetRepository::new(
        infras.store.clone(),
        infras.http_client.clone(),
        config.ids_path.clone(),
        config.archive_path.clone(),
        config.failed_path.clone(),
    ));
    Repository { tweet }
}

#[derive(Clone)]
pub struct Services {
    pub batch: service::BatchService,
}

#[derive(Clone)]
pub struct AppContext {
    pub infras: Infras,
    pub repository: Repository,
    pub services: Services,
}

pub async fn new(config: Config) -> AppContext {
    let infras = infras();
    let repository = repository(&infras, &config);
    let services = Services {
        batch: service::BatchService::new(repository.tweet.clone(), config.concurrency),
    };
    AppContext {
        infras,
        repository,
        services,
    }
}

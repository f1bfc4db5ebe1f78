use reqwest::Client;
use tracing::{debug, error};

use super::form::MovieForm;
use super::list::MovieList;
use crate::api::{DeleteMovieRequest, MovieInput, UpdateMovieRequest};
use crate::db::Movie;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {0}: {1}")]
    Status(u16, String),
}

/// Thin typed wrapper around the `/api` route.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            endpoint: format!("{}/api", base_url.trim_end_matches('/')),
        }
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        Err(ClientError::Status(status.as_u16(), text))
    }

    pub async fn fetch_movies(&self) -> Result<Vec<Movie>, ClientError> {
        let resp = self.http.get(&self.endpoint).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn create_movie(&self, input: &MovieInput) -> Result<Movie, ClientError> {
        let resp = self.http.post(&self.endpoint).json(input).send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    pub async fn update_movie(&self, id: &str, input: &MovieInput) -> Result<(), ClientError> {
        let body = UpdateMovieRequest {
            id: Some(id.to_string()),
            movie: input.clone(),
        };
        let resp = self.http.put(&self.endpoint).json(&body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn delete_movie(&self, id: &str) -> Result<(), ClientError> {
        let body = DeleteMovieRequest {
            id: Some(id.to_string()),
        };
        let resp = self.http.delete(&self.endpoint).json(&body).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

/// A catalog session driving the API the way the home page does: one list
/// fetch on mount, then local updates from confirmed responses. Failed
/// requests are logged and otherwise ignored.
#[derive(Debug)]
pub struct Catalog {
    client: ApiClient,
    list: MovieList,
    form: MovieForm,
}

impl Catalog {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            list: MovieList::new(),
            form: MovieForm::default(),
        }
    }

    pub fn list(&self) -> &MovieList {
        &self.list
    }

    pub fn form(&self) -> &MovieForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MovieForm {
        &mut self.form
    }

    pub async fn mount(&mut self) {
        match self.client.fetch_movies().await {
            Ok(movies) => self.list.load(movies),
            Err(e) => error!("Failed to fetch movies: {}", e),
        }
    }

    /// Enter edit mode and fill the form from the record.
    pub fn edit(&mut self, id: &str) -> bool {
        if !self.list.begin_edit(id) {
            return false;
        }
        self.form = self.list.form();
        true
    }

    pub fn cancel(&mut self) {
        self.list.cancel_edit();
        self.form.clear();
    }

    /// Submit the form in the current mode. The form is cleared whether or
    /// not the request succeeds.
    pub async fn submit(&mut self) {
        let input = self.form.submission();
        let fields = self.form.fields();
        self.form.clear();

        let editing_id = self.list.editing().map(|m| m.id.clone());
        match editing_id {
            Some(id) => match self.client.update_movie(&id, &input).await {
                Ok(()) => {
                    debug!(id = %id, "movie updated");
                    self.list.apply_updated(&id, &fields);
                }
                Err(e) => error!("Failed to update movie: {}", e),
            },
            None => match self.client.create_movie(&input).await {
                Ok(movie) => {
                    debug!(id = %movie.id, "movie added");
                    self.list.apply_created(movie);
                }
                Err(e) => error!("Failed to add movie: {}", e),
            },
        }
    }

    pub async fn delete(&mut self, id: &str) {
        match self.client.delete_movie(id).await {
            Ok(()) => self.list.apply_deleted(id),
            Err(e) => error!("Failed to delete movie: {}", e),
        }
    }
}

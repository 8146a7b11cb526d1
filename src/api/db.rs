//! Managed database calls, including the binary dump/restore transfers.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::header::ACCEPT;

use super::types::{DatabaseCreateResponse, DatabaseRestoreResponse, DatabasesListResponse, DeleteResponse};
use super::{parse_api_error, ApiClient};
use crate::error::SkiffResult;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DUMP_TIMEOUT: Duration = Duration::from_secs(5 * 60);

impl ApiClient {
    /// Lists all managed databases.
    pub fn list_databases(&self) -> SkiffResult<DatabasesListResponse> {
        let req = self.http.get(self.url("/databases"));
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Creates a new managed database.
    pub fn create_database(&self, name: &str) -> SkiffResult<DatabaseCreateResponse> {
        let req = self
            .http
            .post(self.url("/databases"))
            .json(&serde_json::json!({ "name": name }));
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Deletes a database by name.
    pub fn delete_database(&self, name: &str) -> SkiffResult<DeleteResponse> {
        let req = self.http.delete(self.url(&format!("/databases/{name}")));
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Restores a database from a local dump file, uploaded as a
    /// single-part multipart form.
    pub fn restore_database(
        &self,
        name: &str,
        dump_path: &Path,
    ) -> SkiffResult<DatabaseRestoreResponse> {
        let file = File::open(dump_path)?;
        let part = Part::reader(file).file_name("dump");
        let form = Form::new().part("dump", part);

        let req = self
            .http
            .post(self.url(&format!("/databases/{name}/restore")))
            .multipart(form);
        self.send(req, REQUEST_TIMEOUT)
    }

    /// Downloads a database dump, streaming the body into `out`. The
    /// caller owns the writer and any cleanup on failure.
    pub fn dump_database(&self, name: &str, out: &mut impl Write) -> SkiffResult<()> {
        let mut response = self
            .http
            .get(self.url(&format!("/databases/{name}/dump")))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/octet-stream")
            .timeout(DUMP_TIMEOUT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            return Err(parse_api_error(status, &body));
        }

        io::copy(&mut response, out)?;
        Ok(())
    }
}

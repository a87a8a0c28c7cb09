use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::database::metrics as metrics_db;
use crate::database::Database;
use crate::errors::ApiResult;

pub async fn get_metrics(db: web::Data<Arc<Database>>) -> ApiResult<HttpResponse> {
    let metrics = metrics_db::get_metrics(&db).await;

    Ok(HttpResponse::Ok().json(metrics))
}

use axum::{
    debug_handler,
    extract::{Path, State},
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{include_res, res, session, AppError, AppResult, AppState};

use super::store::{course_id, CourseStore};

#[debug_handler(state = AppState)]
pub async fn index(
    State(courses): State<CourseStore>,
    session: Session,
) -> AppResult<Response> {
    let user = session::current_user(&session).await?;

    let catalog = match courses.all().await {
        Ok(catalog) => catalog,
        Err(AppError::NotFound(message)) => return res::not_found(&message),
        Err(err) => return Err(err),
    };

    let mut items = String::new();
    for course in &catalog {
        let Some(id) = course_id(course) else {
            continue;
        };

        items += &include_res!(str, "/pages/course_item.html")
            .replace("{id}", &id)
            .replace("{title}", &res::escape(str_field(course, "title").unwrap_or(&id)))
            .replace("{description}", &res::escape(str_field(course, "description").unwrap_or("")));
    }

    let body = include_res!(str, "/pages/index.html")
        .replace("{user_nav}", &res::user_nav(user.as_ref()))
        .replace("{course_items}", &items);

    Ok(Html(body).into_response())
}

#[debug_handler(state = AppState)]
pub async fn detail(
    Path(id): Path<String>,
    State(courses): State<CourseStore>,
    session: Session,
) -> AppResult<Response> {
    let user = session::current_user(&session).await?;

    let course = match courses.get(&id).await {
        Ok(course) => course,
        Err(AppError::NotFound(message)) => return res::not_found(&message),
        Err(err) => return Err(err),
    };

    let mut lessons = String::new();
    if let Some(list) = course.get("lessons").and_then(Value::as_array) {
        for lesson in list {
            let title = lesson
                .as_str()
                .or_else(|| lesson.get("title").and_then(Value::as_str))
                .unwrap_or("Untitled lesson");
            lessons += &format!("<li>{}</li>\n", res::escape(title));
        }
    }

    let body = include_res!(str, "/pages/course.html")
        .replace("{user_nav}", &res::user_nav(user.as_ref()))
        .replace("{title}", &res::escape(str_field(&course, "title").unwrap_or(&id)))
        .replace("{description}", &res::escape(str_field(&course, "description").unwrap_or("")))
        .replace("{lessons}", &lessons);

    Ok(Html(body).into_response())
}

fn str_field<'a>(course: &'a Value, field: &str) -> Option<&'a str> {
    course.get(field).and_then(Value::as_str)
}

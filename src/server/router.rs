use axum::{routing::get, Router};

use crate::server::{
    controller::{
        address::{
            create_address, delete_address, get_address, get_addresses, get_addresses_of_student,
            update_address,
        },
        student::{create_student, delete_student, get_student, get_students, update_student},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(get_students).post(create_student))
        .route(
            "/api/students/{student_id}",
            get(get_student).patch(update_student).delete(delete_student),
        )
        .route("/api/addresses", get(get_addresses).post(create_address))
        .route(
            "/api/addresses/{address_id}",
            get(get_address).patch(update_address).delete(delete_address),
        )
        .route(
            "/api/addresses/GetAddressesOfStudent/{student_id}",
            get(get_addresses_of_student),
        )
}

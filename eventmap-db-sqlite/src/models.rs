#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// Coordinates are stored as fixed-point integers in micro degrees.

use super::schema::*;

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = location)]
#[diesel(treat_none_as_null = true)]
pub struct NewLocation<'a> {
    pub id: &'a str,
    pub street: Option<&'a str>,
    pub city: &'a str,
    pub country: &'a str,
    pub place_id: Option<&'a str>,
    pub formatted_address: Option<&'a str>,
    pub lat: Option<i32>,
    pub lng: Option<i32>,
}

#[derive(Queryable)]
pub struct Location {
    pub rowid: i64,
    pub id: String,
    pub street: Option<String>,
    pub city: String,
    pub country: String,
    pub place_id: Option<String>,
    pub formatted_address: Option<String>,
    pub lat: Option<i32>,
    pub lng: Option<i32>,
}

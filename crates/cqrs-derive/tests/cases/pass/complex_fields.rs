// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, NaiveDate, Utc};
use cqrs_derive::GenerateCqrs;

pub struct Venue {
    pub city: String
}

#[allow(non_snake_case)]
#[derive(GenerateCqrs)]
pub struct Event {
    pub Id:        i64,
    pub title:     String,
    pub starts_at: DateTime<Utc>,
    pub day:       NaiveDate,
    pub ends_at:   Option<chrono::DateTime<Utc>>,
    pub notes:     Option<Vec<String>>,
    pub tags:      Vec<String>,
    pub venue:     Venue
}

fn main() {
    // Collections and nested records are left out, optional or not
    let now = Utc::now();
    let create = CreateEventCommand {
        title:     "RustConf".to_string(),
        starts_at: now,
        day:       now.date_naive(),
        ends_at:   None
    };
    assert_eq!(create.starts_at, now);

    let update = UpdateEventCommand {
        Id:        1,
        title:     "RustConf".to_string(),
        starts_at: now,
        day:       now.date_naive(),
        ends_at:   Some(now)
    };
    assert_eq!(update.Id, 1);

    let result = GetEventQueryResult {
        Id:        1,
        title:     "RustConf".to_string(),
        starts_at: now,
        day:       now.date_naive(),
        ends_at:   None
    };
    assert_eq!(result.title, "RustConf");

    let by_id = GetEventByIdQuery::new(1);
    assert_eq!(by_id.Id, 1);
}

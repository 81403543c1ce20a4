// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqrs_derive::{GenerateCqrs, Request};

#[derive(Debug, Clone, PartialEq, GenerateCqrs)]
#[generate_cqrs(generate_handlers = true)]
pub struct Tag {
    pub label: String
}

fn created_id(id: <CreateTagCommand as Request>::Response) -> i32 {
    id
}

fn main() {
    // Without an `id` field the identifier is `id: i32`
    let create = CreateTagCommand {
        label: "rust".to_string()
    };
    assert_eq!(create.label, "rust");
    assert_eq!(created_id(3), 3);

    let update = UpdateTagCommand {
        id:    3,
        label: "rustlang".to_string()
    };
    assert_eq!(update.id, 3);

    let remove = RemoveTagCommand::new(3);
    assert_eq!(remove.id, 3);

    let result = GetTagQueryResult {
        label: "rust".to_string()
    };
    assert_eq!(result.label, "rust");

    let _handler = GetAllTagsQueryHandler::new(());
}

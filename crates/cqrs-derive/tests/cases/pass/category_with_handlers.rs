// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqrs_derive::{GenerateCqrs, Identified, MemoryStore, Request, RequestHandler};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, GenerateCqrs)]
#[generate_cqrs(true)]
pub struct Category {
    pub id:       Uuid,
    pub name:     String,
    pub products: Vec<Product>
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id:   i32,
    pub name: String
}

impl Identified for Category {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }

    fn assign_id(&mut self, id: Uuid) {
        self.id = id;
    }
}

fn handles<R: Request, H: RequestHandler<R>>(_: &H) {}

fn created_id(_: <CreateCategoryCommand as Request>::Response) {}

fn main() {
    // Create omits the identifier and non-simple fields
    let create = CreateCategoryCommand {
        name: "Books".to_string()
    };
    assert_eq!(create.name, "Books");
    created_id(Uuid::nil());

    // Update carries the identifier
    let update = UpdateCategoryCommand {
        id:   Uuid::nil(),
        name: "Comics".to_string()
    };
    assert_eq!(update.clone(), update);

    let remove = RemoveCategoryCommand::new(Uuid::nil());
    assert_eq!(remove.id, Uuid::nil());

    let by_id = GetCategoryByIdQuery::new(Uuid::nil());
    assert_eq!(by_id.id, Uuid::nil());

    let all = GetAllCategorysQuery::default();
    assert_eq!(all, GetAllCategorysQuery);

    let result = GetCategoryQueryResult {
        id:   Uuid::nil(),
        name: "Books".to_string()
    };
    assert_eq!(result.name, "Books");

    handles::<CreateCategoryCommand, _>(&CreateCategoryCommandHandler::new(MemoryStore::<Category>::new()));
    handles::<UpdateCategoryCommand, _>(&UpdateCategoryCommandHandler::new(MemoryStore::<Category>::new()));
    handles::<RemoveCategoryCommand, _>(&RemoveCategoryCommandHandler::new(MemoryStore::<Category>::new()));
    handles::<GetCategoryByIdQuery, _>(&GetCategoryByIdQueryHandler::new(MemoryStore::<Category>::new()));
    handles::<GetAllCategorysQuery, _>(&GetAllCategorysQueryHandler::new(MemoryStore::<Category>::new()));
}

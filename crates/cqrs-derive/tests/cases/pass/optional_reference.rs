// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqrs_derive::GenerateCqrs;

pub struct Category {
    pub id:   u32,
    pub name: String
}

#[derive(GenerateCqrs)]
pub struct Product {
    pub id:       i32,
    pub name:     String,
    pub discount: Option<f64>,
    pub category: Option<Category>
}

fn main() {
    // Optional scalars are carried, optional navigation is not
    let create = CreateProductCommand {
        name:     "Pen".to_string(),
        discount: None
    };
    assert!(create.discount.is_none());

    let update = UpdateProductCommand {
        id:       7,
        name:     "Pen".to_string(),
        discount: Some(0.5)
    };
    assert_eq!(update.discount, Some(0.5));

    let result = GetProductQueryResult {
        id:       7,
        name:     "Pen".to_string(),
        discount: None
    };
    assert_eq!(result.id, 7);

    let product = Product {
        id:       7,
        name:     "Pen".to_string(),
        discount: None,
        category: Some(Category {
            id:   1,
            name: "Office".to_string()
        })
    };
    assert_eq!(product.category.map(|c| c.name), Some("Office".to_string()));

    let _ = RemoveProductCommand::new(7);
    let _ = GetProductByIdQuery::new(7);
    let _ = GetAllProductsQuery;
}

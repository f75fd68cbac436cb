//! Tests for the in-memory template repository

use crate::domain::entities::template::{Template, TemplateCategory, TemplateDetail};
use crate::repositories::template::{MockTemplateRepository, TemplateRepository};

fn category(id: u64, sort_order: i32, is_active: bool) -> TemplateCategory {
    TemplateCategory {
        id,
        name: format!("category-{id}"),
        description: String::new(),
        icon: String::new(),
        sort_order,
        is_active,
    }
}

fn template(id: u64, category_id: u64, sort_order: i32, is_active: bool) -> Template {
    Template {
        id,
        category_id,
        title: format!("template-{id}"),
        description: String::new(),
        tags: String::new(),
        is_pro: false,
        sort_order,
        is_active,
    }
}

#[tokio::test]
async fn test_active_categories_are_ordered() {
    let repo = MockTemplateRepository::new();
    repo.insert_category(category(3, 1, true)).await;
    repo.insert_category(category(1, 2, true)).await;
    repo.insert_category(category(2, 1, true)).await;
    repo.insert_category(category(4, 0, false)).await;

    let ids: Vec<u64> = repo
        .list_active_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();

    assert_eq!(ids, vec![2, 3, 1]);
}

#[tokio::test]
async fn test_active_templates_are_ordered_by_category_first() {
    let repo = MockTemplateRepository::new();
    repo.insert_template(template(10, 2, 0, true)).await;
    repo.insert_template(template(11, 1, 5, true)).await;
    repo.insert_template(template(12, 1, 1, true)).await;
    repo.insert_template(template(13, 1, 1, false)).await;

    let ids: Vec<u64> = repo
        .list_active_templates()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id)
        .collect();

    assert_eq!(ids, vec![12, 11, 10]);
}

#[tokio::test]
async fn test_find_active_template_skips_inactive_rows() {
    let repo = MockTemplateRepository::new();
    repo.insert_template(template(1, 1, 0, true)).await;
    repo.insert_template(template(2, 1, 0, false)).await;

    assert!(repo.find_active_template(1).await.unwrap().is_some());
    assert!(repo.find_active_template(2).await.unwrap().is_none());
    assert!(repo.find_active_template(3).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_category_ignores_active_flag() {
    let repo = MockTemplateRepository::new();
    repo.insert_category(category(7, 0, false)).await;

    assert_eq!(repo.find_category(7).await.unwrap().unwrap().id, 7);
    assert!(repo.find_category(8).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_detail() {
    let repo = MockTemplateRepository::new();
    repo.insert_detail(TemplateDetail {
        template_id: 5,
        headline: "Headline".to_string(),
        summary: String::new(),
        reply_soft: String::new(),
        reply_neutral: String::new(),
        reply_firm: String::new(),
        when_not_to_use: String::new(),
        best_practices: String::new(),
    })
    .await;

    assert_eq!(repo.find_detail(5).await.unwrap().unwrap().headline, "Headline");
    assert!(repo.find_detail(6).await.unwrap().is_none());
}

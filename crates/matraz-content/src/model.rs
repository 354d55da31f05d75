//! Input models for content mutations

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateHero {
    pub section: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHero {
    pub section: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMarket {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image_url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub solutions: Option<serde_json::Value>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMarket {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_image_url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    pub solutions: Option<serde_json::Value>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateIndustry {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub icon_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIndustry {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub icon_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTechnicalService {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTechnicalService {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSocialLink {
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSocialLink {
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo_url: Option<String>,
    pub position: Option<i32>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_hero_deserialization() {
        let json = r#"{"section": "home", "title": "Lab equipment", "active": true}"#;
        let input: CreateHero = serde_json::from_str(json).unwrap();
        assert_eq!(input.section.as_deref(), Some("home"));
        assert_eq!(input.title.as_deref(), Some("Lab equipment"));
        assert!(input.cta_link.is_none());
    }

    #[test]
    fn test_create_market_with_solutions() {
        let json = r#"{
            "name": "Clinical Labs",
            "slug": "clinical-labs",
            "solutions": ["analyzers", "reagents"]
        }"#;
        let input: CreateMarket = serde_json::from_str(json).unwrap();
        assert_eq!(input.slug.as_deref(), Some("clinical-labs"));
        assert!(input.solutions.unwrap().is_array());
    }
}

//! Integration tests for the venue repository.
//!
//! - Create / find / update / delete round trips
//! - Area listing and recent listings
//! - Case-insensitive name search with upcoming show counts
//! - Delete cascades to shows

use chrono::{Duration, Utc};
use sqlx::PgPool;
use fyyur_db::models::artist::CreateArtist;
use fyyur_db::models::show::CreateShow;
use fyyur_db::models::venue::CreateVenue;
use fyyur_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_venue(name: &str, city: &str, state: &str) -> CreateVenue {
    CreateVenue {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: Some("123-123-1234".to_string()),
        image_link: None,
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        facebook_link: None,
        website_link: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist".to_string()),
    }
}

fn new_artist(name: &str) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: None,
        image_link: None,
        genres: vec!["Rock n Roll".to_string()],
        facebook_link: None,
        website_link: None,
        seeking_venue: false,
        seeking_description: None,
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_venue(pool: PgPool) {
    let created = VenueRepo::create(&pool, &new_venue("The Musical Hop", "San Francisco", "CA"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.genres, vec!["Jazz", "Folk"]);
    assert!(created.seeking_talent);

    let found = VenueRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "The Musical Hop");
    assert_eq!(found.phone.as_deref(), Some("123-123-1234"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_venue_returns_none(pool: PgPool) {
    assert!(VenueRepo::find_by_id(&pool, 424242).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_all_columns(pool: PgPool) {
    let created = VenueRepo::create(&pool, &new_venue("Old Name", "Austin", "TX"))
        .await
        .unwrap();

    let mut input = new_venue("New Name", "Dallas", "TX");
    input.phone = None;
    input.genres = vec!["Blues".to_string()];
    input.seeking_talent = false;
    input.seeking_description = None;

    let updated = VenueRepo::update(&pool, created.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "New Name");
    assert_eq!(updated.city, "Dallas");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.genres, vec!["Blues"]);
    assert!(!updated.seeking_talent);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_venue_returns_none(pool: PgPool) {
    let result = VenueRepo::update(&pool, 424242, &new_venue("Ghost", "Austin", "TX"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_venue_and_its_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Doomed Hall", "Austin", "TX"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Survivor")).await.unwrap();
    ShowRepo::create(
        &pool,
        &CreateShow {
            artist_id: artist.id,
            venue_id: venue.id,
            start_time: Utc::now() + Duration::days(7),
        },
    )
    .await
    .unwrap();

    let deleted = VenueRepo::delete(&pool, venue.id).await.unwrap().unwrap();
    assert_eq!(deleted.name, "Doomed Hall");

    assert!(VenueRepo::find_by_id(&pool, venue.id).await.unwrap().is_none());
    assert!(ShowRepo::list_for_artist(&pool, artist.id).await.unwrap().is_empty());
    let locations = VenueRepo::list_locations(&pool).await.unwrap();
    assert!(locations.iter().all(|l| l.id != venue.id));

    // The artist itself survives.
    assert!(ArtistRepo::find_by_id(&pool, artist.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_venue_returns_none(pool: PgPool) {
    assert!(VenueRepo::delete(&pool, 424242).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_locations_ordered_by_state_city_name(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("Zeta", "San Francisco", "CA")).await.unwrap();
    VenueRepo::create(&pool, &new_venue("Dueling Pianos", "New York", "NY")).await.unwrap();
    VenueRepo::create(&pool, &new_venue("Alpha", "San Francisco", "CA")).await.unwrap();

    let locations = VenueRepo::list_locations(&pool).await.unwrap();
    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Zeta", "Dueling Pianos"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_recent_newest_first_with_limit(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        VenueRepo::create(&pool, &new_venue(name, "Austin", "TX")).await.unwrap();
    }

    let recent = VenueRepo::list_recent(&pool, 2).await.unwrap();
    let names: Vec<&str> = recent.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Third", "Second"]);
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive_substring(pool: PgPool) {
    let jazz = VenueRepo::create(&pool, &new_venue("Jazz Club", "New Orleans", "LA"))
        .await
        .unwrap();
    VenueRepo::create(&pool, &new_venue("Rock Bar", "Austin", "TX")).await.unwrap();

    let hits = VenueRepo::search_by_name(&pool, "jazz", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, jazz.id);
    assert_eq!(hits[0].name, "Jazz Club");

    let hits = VenueRepo::search_by_name(&pool, "CLUB", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_unmatched_term_returns_nothing(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("Jazz Club", "New Orleans", "LA")).await.unwrap();

    let hits = VenueRepo::search_by_name(&pool, "polka", Utc::now()).await.unwrap();
    assert!(hits.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_treats_wildcards_literally(pool: PgPool) {
    VenueRepo::create(&pool, &new_venue("Jazz Club", "New Orleans", "LA")).await.unwrap();
    VenueRepo::create(&pool, &new_venue("100% Jazz", "New Orleans", "LA")).await.unwrap();

    let hits = VenueRepo::search_by_name(&pool, "%", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "100% Jazz");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_counts_only_upcoming_shows(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &new_venue("Jazz Club", "New Orleans", "LA"))
        .await
        .unwrap();
    let artist = ArtistRepo::create(&pool, &new_artist("Trumpeter")).await.unwrap();
    let now = Utc::now();
    for offset in [-5, 3, 9] {
        ShowRepo::create(
            &pool,
            &CreateShow {
                artist_id: artist.id,
                venue_id: venue.id,
                start_time: now + Duration::days(offset),
            },
        )
        .await
        .unwrap();
    }

    let hits = VenueRepo::search_by_name(&pool, "jazz", now).await.unwrap();
    assert_eq!(hits[0].num_upcoming_shows, 2);
}

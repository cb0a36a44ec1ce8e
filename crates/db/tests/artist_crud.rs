//! Integration tests for the artist repository.

use chrono::Utc;
use sqlx::PgPool;
use fyyur_db::models::artist::CreateArtist;
use fyyur_db::repositories::ArtistRepo;

fn new_artist(name: &str, seeking_venue: bool) -> CreateArtist {
    CreateArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        image_link: Some("https://images.example.com/artist.jpg".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        facebook_link: None,
        website_link: None,
        seeking_venue,
        seeking_description: seeking_venue.then(|| "Looking for shows".to_string()),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_artist(pool: PgPool) {
    let created = ArtistRepo::create(&pool, &new_artist("Guns N Petals", true))
        .await
        .unwrap();
    let found = ArtistRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.name, "Guns N Petals");
    assert!(found.seeking_venue);
    assert_eq!(found.genres, vec!["Rock n Roll"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_clear_seeking_venue(pool: PgPool) {
    let created = ArtistRepo::create(&pool, &new_artist("Matt Quevedo", true))
        .await
        .unwrap();

    let updated = ArtistRepo::update(&pool, created.id, &new_artist("Matt Quevedo", false))
        .await
        .unwrap()
        .unwrap();
    assert!(!updated.seeking_venue);
    assert_eq!(updated.seeking_description, None);

    let reloaded = ArtistRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert!(!reloaded.seeking_venue);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_names_sorted(pool: PgPool) {
    ArtistRepo::create(&pool, &new_artist("The Wild Sax Band", false)).await.unwrap();
    ArtistRepo::create(&pool, &new_artist("Guns N Petals", false)).await.unwrap();

    let names: Vec<String> = ArtistRepo::list_names(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.name)
        .collect();
    assert_eq!(names, vec!["Guns N Petals", "The Wild Sax Band"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_artists(pool: PgPool) {
    ArtistRepo::create(&pool, &new_artist("Guns N Petals", false)).await.unwrap();
    ArtistRepo::create(&pool, &new_artist("Matt Quevedo", false)).await.unwrap();
    ArtistRepo::create(&pool, &new_artist("The Wild Sax Band", false)).await.unwrap();

    let hits = ArtistRepo::search_by_name(&pool, "A", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 3);

    let hits = ArtistRepo::search_by_name(&pool, "band", Utc::now()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "The Wild Sax Band");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_artist(pool: PgPool) {
    let created = ArtistRepo::create(&pool, &new_artist("Gone", false)).await.unwrap();
    assert!(ArtistRepo::delete(&pool, created.id).await.unwrap().is_some());
    assert!(ArtistRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
    assert!(ArtistRepo::delete(&pool, created.id).await.unwrap().is_none());
}

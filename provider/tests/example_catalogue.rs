//! Behaviour tests for seeding the provider from generated example data.

use example_data::{SeedRegistry, generate_example_catalogue, generate_example_users};
use pagination::PageRequest;
use provider::domain::AlbumQuery;
use provider::domain::ports::{LoginService, TokenIssuer};
use provider::example_catalogue::seed_library;
use provider::outbound::memory::in_memory_library_service;
use provider::test_support::credentials;

const REGISTRY_JSON: &str = r#"{
    "version": 1,
    "seeds": [
        {"name": "showcase", "seed": 2026, "userCount": 3, "artistCount": 7, "maxAlbumsPerArtist": 4}
    ]
}"#;

#[tokio::test]
async fn a_generated_library_serves_sessions_end_to_end() {
    let registry = SeedRegistry::from_json(REGISTRY_JSON).expect("valid registry");
    let seed_def = registry.find_seed("showcase").expect("seed exists");
    let users = generate_example_users(seed_def).expect("users generate");
    let artists = generate_example_catalogue(seed_def).expect("catalogue generates");

    let service = in_memory_library_service();
    seed_library(&service, &users, &artists)
        .await
        .expect("seeding succeeds");

    let first_user = users.first().expect("at least one user");
    let issued = service
        .issue_token(&credentials(&first_user.username, &first_user.password))
        .await
        .expect("issuance succeeds for seeded user");
    let library = service
        .login(issued.auth_token())
        .await
        .expect("login succeeds");

    let listing = library.artists(&PageRequest::all());
    assert_eq!(listing.total(), artists.len());

    let album_total: usize = artists.iter().map(|artist| artist.albums.len()).sum();
    let albums = library.albums(&AlbumQuery::all());
    assert_eq!(albums.total(), album_total);
}

#[tokio::test]
async fn seeding_is_reproducible_across_providers() {
    let registry = SeedRegistry::from_json(REGISTRY_JSON).expect("valid registry");
    let seed_def = registry.find_seed("showcase").expect("seed exists");

    let artists = generate_example_catalogue(seed_def).expect("catalogue generates");
    let again = generate_example_catalogue(seed_def).expect("catalogue regenerates");
    assert_eq!(artists, again, "same seed must rebuild the same catalogue");

    let service = in_memory_library_service();
    seed_library(&service, &[], &artists)
        .await
        .expect("seeding succeeds");
    let rebuilt = in_memory_library_service();
    seed_library(&rebuilt, &[], &again)
        .await
        .expect("re-seeding succeeds");
}

#[tokio::test]
async fn windows_over_a_generated_catalogue_cover_it_exactly_once() {
    let registry = SeedRegistry::from_json(REGISTRY_JSON).expect("valid registry");
    let seed_def = registry.find_seed("showcase").expect("seed exists");
    let users = generate_example_users(seed_def).expect("users generate");
    let artists = generate_example_catalogue(seed_def).expect("catalogue generates");

    let service = in_memory_library_service();
    seed_library(&service, &users, &artists)
        .await
        .expect("seeding succeeds");

    let user = users.first().expect("at least one user");
    let issued = service
        .issue_token(&credentials(&user.username, &user.password))
        .await
        .expect("issuance succeeds");
    let library = service
        .login(issued.auth_token())
        .await
        .expect("login succeeds");

    // Walk the artist listing two at a time and stitch the windows back
    // together; the result must be the generated sequence exactly.
    let mut collected = Vec::new();
    let mut index = 0;
    loop {
        let page = library.artists(&PageRequest::new(index, Some(2)));
        assert_eq!(page.total(), artists.len());
        if page.is_empty() {
            break;
        }
        index += page.len();
        collected.extend(
            page.into_results()
                .into_iter()
                .map(|summary| String::from(summary.id().as_ref())),
        );
    }

    let expected: Vec<String> = artists.iter().map(|a| a.id.to_string()).collect();
    assert_eq!(collected, expected);
}

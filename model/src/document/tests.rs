use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("My Spec v2"), "my-spec-v2");
    assert_eq!(slugify("already-slugged"), "already-slugged");
    assert_eq!(slugify("  padded   name  "), "padded-name");
    assert_eq!(slugify("Network_Diagram (final)"), "network-diagram-final");
}

#[test]
fn slugify_drops_leading_and_trailing_separators() {
    assert_eq!(slugify("---x---"), "x");
    assert_eq!(slugify("!!!"), "");
}

#[test]
fn stored_name_combines_slug_timestamp_and_extension() {
    let (file_name, extension) = stored_file_name("My Spec v2.PDF", 1_726_000_000);
    assert_eq!(file_name, "my-spec-v2_1726000000.pdf");
    assert_eq!(extension, "pdf");
}

#[test]
fn stored_name_without_extension_has_no_trailing_dot() {
    let (file_name, extension) = stored_file_name("README", 42);
    assert_eq!(file_name, "readme_42");
    assert_eq!(extension, "");
}

#[test]
fn stored_name_for_dotfile_treats_whole_name_as_base() {
    let (file_name, extension) = stored_file_name(".env", 42);
    assert_eq!(file_name, "env_42");
    assert_eq!(extension, "");
}

#[test]
fn stored_name_falls_back_when_slug_is_empty() {
    let (file_name, extension) = stored_file_name("???.pdf", 7);
    assert_eq!(file_name, "file_7.pdf");
    assert_eq!(extension, "pdf");
}

#[test]
fn same_name_different_timestamps_never_collide() {
    let (a, _) = stored_file_name("report.pdf", 100);
    let (b, _) = stored_file_name("report.pdf", 101);
    assert_ne!(a, b);
}

#[test]
fn storage_path_is_namespaced() {
    assert_eq!(
        document_storage_path("spec_1.pdf"),
        "portal-requests/documents/spec_1.pdf"
    );
}

#[test]
fn format_file_size_uses_binary_units() {
    assert_eq!(format_file_size(0), "0 bytes");
    assert_eq!(format_file_size(512), "512 bytes");
    assert_eq!(format_file_size(1023), "1023 bytes");
    assert_eq!(format_file_size(1024), "1.00 KB");
    assert_eq!(format_file_size(1536), "1.50 KB");
    assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024 + 512 * 1024 * 1024), "3.50 GB");
}

#[test]
fn public_url_joins_without_double_slashes() {
    assert_eq!(
        public_document_url("https://cdn.example.com/", "portal-requests/documents/a.pdf"),
        "https://cdn.example.com/portal-requests/documents/a.pdf"
    );
    assert_eq!(
        public_document_url("https://cdn.example.com", "portal-requests/documents/a.pdf"),
        "https://cdn.example.com/portal-requests/documents/a.pdf"
    );
}

#[test]
fn two_megabyte_upload_reads_as_two_point_zero_zero() {
    let document = PortalRequestDocument {
        id: uuid::Uuid::new_v4(),
        portal_request_id: uuid::Uuid::new_v4(),
        file_name: "spec_1726000000.pdf".to_string(),
        file_path: "portal-requests/documents/spec_1726000000.pdf".to_string(),
        original_name: "spec.pdf".to_string(),
        mime_type: "application/pdf".to_string(),
        file_size: 2 * 1024 * 1024,
        extension: "pdf".to_string(),
        created_at: chrono::Utc::now(),
        updated_at: chrono::Utc::now(),
        deleted_at: None,
    };
    assert_eq!(document.formatted_size(), "2.00 MB");

    let response = document.to_response("https://cdn.example.com");
    assert_eq!(response.formatted_size, "2.00 MB");
    assert_eq!(
        response.url,
        "https://cdn.example.com/portal-requests/documents/spec_1726000000.pdf"
    );
}

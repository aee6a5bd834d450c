use super::*;

#[test]
fn mock_user_is_well_formed() {
    let user = mock_user();
    assert!(!user.id.is_empty());
    assert!(user.email.contains('@'));
    assert!(user.avatar_url.is_some());
}

#[test]
fn mock_files_have_unique_ids() {
    let files = mock_files();
    assert!(!files.is_empty());
    for (i, a) in files.iter().enumerate() {
        for b in files.iter().skip(i + 1) {
            assert_ne!(a.id, b.id);
        }
    }
}

#[test]
fn mock_files_folders_have_no_thumbnail() {
    for file in mock_files() {
        if file.kind == FileKind::Folder {
            assert!(file.thumbnail_url.is_none(), "{} has a thumbnail", file.name);
        }
    }
}

#[test]
fn mock_collaborators_have_mixed_permissions() {
    let collabs = mock_collaborators();
    assert!(collabs.iter().any(|c| c.permission == Permission::Edit));
    assert!(collabs.iter().any(|c| c.permission == Permission::View));
}

#[test]
fn collaborator_from_email_derives_name() {
    let c = collaborator_from_email("casey@example.com", Permission::View);
    assert_eq!(c.user.name, "casey");
    assert_eq!(c.user.email, "casey@example.com");
    assert_eq!(c.permission, Permission::View);
}

#[test]
fn collaborator_ids_are_unique() {
    let a = collaborator_from_email("x@example.com", Permission::View);
    let b = collaborator_from_email("x@example.com", Permission::View);
    assert_ne!(a.user.id, b.user.id);
}

#[test]
fn shareable_links_are_tokenized_per_call() {
    let a = shareable_link("file-abc-123");
    let b = shareable_link("file-abc-123");
    assert!(a.contains("file-abc-123"));
    assert!(a.contains("token="));
    assert_ne!(a, b);
}

#[test]
fn sample_elements_cover_all_kinds() {
    let elements = sample_elements();
    use canvas::doc::ElementKind;
    assert!(elements.iter().any(|e| e.kind == ElementKind::Rectangle));
    assert!(elements.iter().any(|e| e.kind == ElementKind::Ellipse));
    assert!(elements.iter().any(|e| e.kind == ElementKind::Text));
}

#[test]
fn sample_text_element_has_content() {
    let elements = sample_elements();
    let text = elements.iter().find(|e| e.kind == canvas::doc::ElementKind::Text);
    assert!(text.is_some_and(|e| e.text.is_some()));
}

#[test]
fn prototype_elements_are_non_empty() {
    assert!(!prototype_elements().is_empty());
}

#[test]
fn permission_labels_are_distinct() {
    assert_ne!(Permission::View.label(), Permission::Edit.label());
}

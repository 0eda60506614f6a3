use super::*;

#[test]
fn linkedin_profile_url_formats_handle() {
    assert_eq!(linkedin_profile_url("dumdles"), "https://www.linkedin.com/in/dumdles");
}

#[test]
fn linkedin_profile_url_strips_decoration() {
    assert_eq!(linkedin_profile_url("  @dumdles/ "), "https://www.linkedin.com/in/dumdles");
}

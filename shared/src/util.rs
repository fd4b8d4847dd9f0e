/// Uppercase the first character and lowercase the remainder.
///
/// This matches the display labels of the admin screen exactly, including
/// the quirk that only the very first character is uppercased:
/// "mc-donald" becomes "Mc-donald", not "Mc-Donald".
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(value.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

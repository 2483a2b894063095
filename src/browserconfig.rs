pub const BROWSERCONFIG_NAME: &str = "browserconfig.xml";
pub const BROWSERCONFIG_MIME: &str = "application/xml";

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Builds browserconfig.xml. `tile_src` is the full URL path of the
/// 150x150 tile icon.
pub fn generate(tile_color: &str, tile_src: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<browserconfig>
    <msapplication>
        <tile>
            <square150x150logo src="{}"/>
            <TileColor>{}</TileColor>
        </tile>
    </msapplication>
</browserconfig>"#,
        escape_xml(tile_src),
        escape_xml(tile_color),
    )
    .into_bytes()
}

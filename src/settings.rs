//! Constant setting tables for the ESP32-CAM sensor driver.
//!
//! [`DEFAULT_SETTINGS`] holds the value used when a document omits a
//! setting; [`CODE_TEMPLATES`] holds one driver call per known setting and
//! fixes the order of the generated code. Both tables are plain `const`
//! data, so nothing here can change at runtime.

use serde_json::Value;

/// Placeholder replaced by the resolved value in every template.
pub const PLACEHOLDER: &str = "{val}";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Default value for each setting, used when the document omits it.
///
/// The first three entries are raw OV2640 register addresses. They, along
/// with `xclk`, `pixformat` and `sharpness`, have no template and are never
/// emitted.
pub const DEFAULT_SETTINGS: &[(&str, i64)] = &[
    ("0xd3", 8),
    ("0x111", 0),
    ("0x132", 9),
    ("xclk", 20),
    ("pixformat", 4),
    ("framesize", 10),
    ("quality", 9),
    ("brightness", 0),
    ("contrast", 0),
    ("saturation", 0),
    ("sharpness", 0),
    ("special_effect", 0),
    ("wb_mode", 0),
    ("awb", 1),
    ("awb_gain", 1),
    ("aec", 1),
    ("aec2", 1),
    ("ae_level", 0),
    ("aec_value", 168),
    ("agc", 1),
    ("agc_gain", 0),
    ("gainceiling", 0),
    ("bpc", 1),
    ("wpc", 1),
    ("raw_gma", 1),
    ("lenc", 1),
    ("hmirror", 0),
    ("dcw", 1),
    ("colorbar", 0),
    ("led_intensity", 0),
];

// ---------------------------------------------------------------------------
// Code templates
// ---------------------------------------------------------------------------

/// A known setting and the driver call it expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeTemplate {
    /// Setting name as it appears in the settings document.
    pub name: &'static str,
    /// Statement text with exactly one [`PLACEHOLDER`].
    pub template: &'static str,
}

const fn tpl(name: &'static str, template: &'static str) -> CodeTemplate {
    CodeTemplate { name, template }
}

/// Every known setting, in output order.
pub const CODE_TEMPLATES: &[CodeTemplate] = &[
    tpl("framesize", "s->set_framesize(s, (framesize_t){val});"),
    tpl("quality", "s->set_quality(s, {val});"),
    tpl("contrast", "s->set_contrast(s, {val});"),
    tpl("brightness", "s->set_brightness(s, {val});"),
    tpl("saturation", "s->set_saturation(s, {val});"),
    tpl("gainceiling", "s->set_gainceiling(s, (gainceiling_t){val});"),
    tpl("colorbar", "s->set_colorbar(s, {val});"),
    tpl("awb", "s->set_whitebal(s, {val});"),
    tpl("agc", "s->set_gain_ctrl(s, {val});"),
    tpl("aec", "s->set_exposure_ctrl(s, {val});"),
    tpl("hmirror", "s->set_hmirror(s, {val});"),
    tpl("vflip", "s->set_vflip(s, {val});"),
    tpl("awb_gain", "s->set_awb_gain(s, {val});"),
    tpl("agc_gain", "s->set_agc_gain(s, {val});"),
    tpl("aec_value", "s->set_aec_value(s, {val});"),
    tpl("aec2", "s->set_aec2(s, {val});"),
    tpl("dcw", "s->set_dcw(s, {val});"),
    tpl("bpc", "s->set_bpc(s, {val});"),
    tpl("wpc", "s->set_wpc(s, {val});"),
    tpl("raw_gma", "s->set_raw_gma(s, {val});"),
    tpl("lenc", "s->set_lenc(s, {val});"),
    tpl("special_effect", "s->set_special_effect(s, {val});"),
    tpl("wb_mode", "s->set_wb_mode(s, {val});"),
    tpl("ae_level", "s->set_ae_level(s, {val});"),
    tpl("led_intensity", "analogWrite(LED_GPIO_NUM, {val});"),
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Default value for `name`, if the defaults table has one.
pub fn default_for(name: &str) -> Option<i64> {
    DEFAULT_SETTINGS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|&(_, value)| value)
}

/// Template for `name`, if it is a known setting.
pub fn template_for(name: &str) -> Option<&'static CodeTemplate> {
    CODE_TEMPLATES.iter().find(|t| t.name == name)
}

/// Whether `name` produces a line of output.
pub fn is_known(name: &str) -> bool {
    template_for(name).is_some()
}

/// Text inserted for `value`.
///
/// Numbers keep the exact digits from the document. Strings are inserted
/// without their quotes; everything else uses its JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Substitute `value` into `template`.
///
/// Only the first placeholder is replaced. No escaping is done.
pub fn render(template: &str, value: &Value) -> String {
    template.replacen(PLACEHOLDER, &value_text(value), 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

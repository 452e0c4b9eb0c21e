use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email_or_username: String,
    pub password: String,
    pub device_info: DeviceInfo,
}

/// Client description sent with every login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DeviceInfo {
    pub device_id: String,
    pub device_type: String,
    pub manufacturer: String,
    pub model: String,
    pub system_version: String,
    pub system_name: String,
    pub app_version: String,
    pub app_build_number: String,
    pub is_emulator: bool,
    pub timezone: String,
    pub locale: String,
}

impl DeviceInfo {
    /// Fills what a browser can tell about itself
    pub fn for_browser(device_id: String) -> Self {
        let navigator = web_sys::window().map(|w| w.navigator());
        let user_agent = navigator
            .as_ref()
            .and_then(|n| n.user_agent().ok())
            .unwrap_or_default();
        let platform = navigator
            .as_ref()
            .and_then(|n| n.platform().ok())
            .unwrap_or_default();
        let locale = navigator
            .as_ref()
            .and_then(|n| n.language())
            .unwrap_or_else(|| "en-US".to_string());
        let options =
            js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &js_sys::Object::new())
                .resolved_options();
        let timezone = js_sys::Reflect::get(&options, &"timeZone".into())
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_else(|| "UTC".to_string());

        Self::new(device_id, user_agent, platform, locale, timezone)
    }

    pub fn new(
        device_id: String,
        user_agent: String,
        platform: String,
        locale: String,
        timezone: String,
    ) -> Self {
        Self {
            device_id,
            device_type: "Browser".to_string(),
            manufacturer: "Web".to_string(),
            model: user_agent,
            system_version: platform.clone(),
            system_name: platform,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            app_build_number: env!("CARGO_PKG_VERSION_PATCH").to_string(),
            is_emulator: false,
            timezone,
            locale,
        }
    }
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct RoleInfo {
    pub slug: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct UserInfo {
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub roles: RoleInfo,
    pub user: UserInfo,
}

/// Shape of every non-2xx body
#[derive(Clone, PartialEq, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_request_uses_camel_case() {
        let device = DeviceInfo::new(
            "d1".into(),
            "Mozilla/5.0".into(),
            "Linux".into(),
            "en-US".into(),
            "Asia/Kolkata".into(),
        );
        let body = serde_json::to_value(LoginRequest {
            email_or_username: "ops@example.com".into(),
            password: "secret".into(),
            device_info: device,
        })
        .unwrap();
        assert_eq!(body["emailOrUsername"], "ops@example.com");
        assert_eq!(body["deviceInfo"]["deviceId"], "d1");
        assert_eq!(body["deviceInfo"]["isEmulator"], false);
    }

    #[test]
    fn decodes_login_response() {
        let json = r#"{
            "accessToken": "a.b.c",
            "roles": { "slug": "Munshi", "name": "Munshi" },
            "user": { "_id": "u1", "email": "m@example.com" }
        }"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.access_token, "a.b.c");
        assert_eq!(response.roles.slug, "Munshi");
        assert_eq!(response.user.id, "u1");
    }
}

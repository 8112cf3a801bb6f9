use {
    crate::error::EmitError,
    handlebars::Handlebars,
    serde::Serialize,
};

pub const PARENT_DOMAIN: &str = "server88.xyz";
pub const UPSTREAM_HOST: &str = "127.0.0.1";
pub const CLIENT_MAX_BODY_SIZE: &str = "1000M";

const TEMPLATE: &str = r#"server {
    server_name {{hostname}};
    listen 443 ssl;
    ssl_certificate {{tls.certificate}};
    ssl_certificate_key {{tls.certificate_key}};
    ssl_client_certificate {{tls.client_certificate}};
    ssl_verify_client off;
    location / {
        proxy_pass http://{{upstream_host}}:{{port}};
        proxy_set_header Host $host;
        proxy_set_header X-Real-IP $remote_addr;
        proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
        proxy_http_version 1.1;
        proxy_set_header Upgrade $http_upgrade;
        proxy_set_header Connection "upgrade";
        client_max_body_size {{client_max_body_size}};
    }
}
server {
    if ($host = {{hostname}}) {
        return 301 https://$host$request_uri;
    }
    server_name {{hostname}};
    listen 80;
    return 404;
}
"#;

/// Certificate material served on the HTTPS block.
#[derive(Debug, Clone, Serialize)]
pub struct TlsPaths {
    pub certificate: String,
    pub certificate_key: String,
    pub client_certificate: String,
}

impl Default for TlsPaths {
    fn default() -> Self {
        Self {
            certificate: "/etc/ssl/cloudflare/origin-cert.pem".to_string(),
            certificate_key: "/etc/ssl/cloudflare/origin-private-key.pem".to_string(),
            client_certificate: "/etc/ssl/cloudflare/cloudflare-origin-ca.pem".to_string(),
        }
    }
}

/// An HTTPS reverse proxy for `<subdomain>.server88.xyz` plus its plain HTTP
/// redirect counterpart.
///
/// Subdomain and port are taken verbatim. Nothing checks that the port is
/// numeric or that the subdomain is a valid DNS label.
#[derive(Debug, Clone, Serialize)]
pub struct VirtualHost {
    pub subdomain: String,
    pub hostname: String,
    pub port: String,
    pub upstream_host: String,
    pub client_max_body_size: String,
    pub tls: TlsPaths,
}

impl VirtualHost {
    pub fn new(subdomain: impl Into<String>, port: impl Into<String>) -> Self {
        let subdomain = subdomain.into();
        Self {
            hostname: format!("{}.{}", subdomain, PARENT_DOMAIN),
            subdomain,
            port: port.into(),
            upstream_host: UPSTREAM_HOST.to_string(),
            client_max_body_size: CLIENT_MAX_BODY_SIZE.to_string(),
            tls: TlsPaths::default(),
        }
    }

    /// File name the rendered config is stored under.
    pub fn file_name(&self) -> String {
        format!("{}.config", self.subdomain)
    }

    /// Renders the complete document into memory.
    pub fn render(&self) -> Result<String, EmitError> {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        hb.register_escape_fn(handlebars::no_escape);
        hb.render_template(TEMPLATE, self).map_err(|source| EmitError::Render {
            hostname: self.hostname.clone(),
            source,
        })
    }
}

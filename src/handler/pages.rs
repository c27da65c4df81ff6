//! HTML page composition module
//!
//! Renders the dashboard, the file viewer, and the create-file form as
//! fully self-contained pages with inline styling and no external
//! assets. Every interpolated value passes through `html_escape`.

use crate::config::Settings;
use crate::http::query::percent_encode;
use crate::resources::ResourceUsage;
use crate::volumes::{VolumeSnapshot, VolumeStatus};

/// Everything the dashboard needs, gathered by the route handler
pub struct DashboardView<'a> {
    pub settings: &'a Settings,
    pub instance_id: &'a str,
    pub hostname: &'a str,
    pub platform: &'a str,
    pub uptime_seconds: f64,
    pub request_count: u64,
    pub usage: ResourceUsage,
    pub volumes: &'a [VolumeSnapshot],
}

/// Escape text for interpolation into HTML body or attribute positions
pub fn html_escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shorten a secret for display: values over 10 characters keep their
/// first 7 followed by `...`, shorter values are shown whole.
pub fn truncate_secret(secret: &str) -> String {
    if secret.chars().count() <= 10 {
        secret.to_string()
    } else {
        let head: String = secret.chars().take(7).collect();
        format!("{head}...")
    }
}

const DASHBOARD_CSS: &str = r"
            body {
                font-family: Arial, sans-serif;
                line-height: 1.6;
                margin: 0;
                padding: 20px;
                background-color: #f5f5f5;
                color: #333;
            }
            h1, h2, h3 { color: #2c3e50; }
            .container {
                max-width: 1000px;
                margin: 0 auto;
                background-color: white;
                padding: 20px;
                border-radius: 8px;
                box-shadow: 0 2px 4px rgba(0,0,0,0.1);
            }
            .info-box {
                background-color: #f8f9fa;
                border-radius: 5px;
                padding: 15px;
                margin-bottom: 20px;
                border-left: 4px solid #3498db;
            }
            .success { color: #27ae60; }
            .error { color: #e74c3c; }
            .warning { color: #f39c12; }
            .file-list {
                background-color: #f9f9f9;
                border-radius: 5px;
                padding: 10px;
                border: 1px solid #ddd;
            }
            .file-item {
                display: flex;
                justify-content: space-between;
                padding: 5px 10px;
                border-bottom: 1px solid #eee;
            }
            .file-item:last-child {
                border-bottom: none;
            }
            .nav-links {
                display: flex;
                gap: 10px;
                margin-top: 20px;
            }
            .nav-link {
                display: inline-block;
                padding: 8px 16px;
                background-color: #3498db;
                color: white;
                text-decoration: none;
                border-radius: 4px;
                font-weight: bold;
            }
            .nav-link:hover {
                background-color: #2980b9;
            }
            .metrics {
                display: flex;
                gap: 10px;
                flex-wrap: wrap;
            }
            .metric-card {
                flex: 1;
                min-width: 120px;
                background-color: #fff;
                padding: 15px;
                border-radius: 8px;
                box-shadow: 0 2px 4px rgba(0,0,0,0.1);
                text-align: center;
            }
            .metric-value {
                font-size: 24px;
                font-weight: bold;
                margin: 10px 0;
                color: #3498db;
            }
            .metric-label {
                font-size: 14px;
                color: #7f8c8d;
            }
            .badge {
                display: inline-block;
                padding: 3px 8px;
                border-radius: 12px;
                font-size: 12px;
                font-weight: bold;
                color: white;
                background-color: #95a5a6;
            }
            .badge-primary { background-color: #3498db; }
            .badge-success { background-color: #27ae60; }
";

/// Render the main dashboard
#[allow(clippy::too_many_lines)]
pub fn dashboard_page(view: &DashboardView<'_>) -> String {
    let settings = view.settings;
    let volumes_html: String = view.volumes.iter().map(volume_section).collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>{app_name} - Pod Dashboard</title>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <style>{styles}</style>
</head>
<body>
    <div class="container">
        <h1>{app_name} <span class="badge badge-primary">v{version}</span></h1>
        <p>A containerized volumes and health demonstration service</p>

        <div class="info-box">
            <h2>Pod Information</h2>
            <p><strong>Instance ID:</strong> {instance_id}</p>
            <p><strong>Hostname:</strong> {hostname}</p>
            <p><strong>Environment:</strong> <span class="badge badge-success">{environment}</span></p>
            <p><strong>Request count:</strong> {request_count}</p>
            <p><strong>Platform:</strong> {platform}</p>
            <p><strong>Uptime:</strong> {uptime:.1} seconds</p>
        </div>

        <div class="info-box">
            <h2>Resource Usage</h2>
            <div class="metrics">
                <div class="metric-card">
                    <div class="metric-label">CPU Usage</div>
                    <div class="metric-value">{cpu:.1}%</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">Memory</div>
                    <div class="metric-value">{memory:.1}%</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">Disk</div>
                    <div class="metric-value">{disk:.1}%</div>
                </div>
                <div class="metric-card">
                    <div class="metric-label">Requests</div>
                    <div class="metric-value">{request_count}</div>
                </div>
            </div>
        </div>

        <div class="info-box">
            <h2>Mounted Volumes</h2>
            {volumes}
        </div>

        <div class="info-box">
            <h2>Actions</h2>
            <div class="nav-links">
                <a href="/create-file" class="nav-link">Create a File</a>
                <a href="/api/info" class="nav-link">API Info</a>
                <a href="/api/health" class="nav-link">Health Check</a>
                <a href="/api/metrics" class="nav-link">Metrics</a>
            </div>
        </div>

        <div class="info-box">
            <h2>Environment Variables</h2>
            <p><strong>APP_NAME:</strong> {app_name}</p>
            <p><strong>APP_VERSION:</strong> {version}</p>
            <p><strong>ENVIRONMENT:</strong> {environment}</p>
            <p><strong>DATA_PATH:</strong> {data_path}</p>
            <p><strong>CONFIG_PATH:</strong> {config_path}</p>
            <p><strong>LOG_PATH:</strong> {log_path}</p>
            <p><strong>SECRET_KEY:</strong> {secret_key}</p>
        </div>
    </div>
</body>
</html>
"#,
        styles = DASHBOARD_CSS,
        app_name = html_escape(&settings.app_name),
        version = html_escape(&settings.app_version),
        environment = html_escape(&settings.environment),
        instance_id = html_escape(view.instance_id),
        hostname = html_escape(view.hostname),
        platform = html_escape(view.platform),
        request_count = view.request_count,
        uptime = view.uptime_seconds,
        cpu = view.usage.cpu_percent,
        memory = view.usage.memory_used_percent,
        disk = view.usage.disk_used_percent,
        volumes = volumes_html,
        data_path = html_escape(&settings.data_path),
        config_path = html_escape(&settings.config_path),
        log_path = html_escape(&settings.log_path),
        secret_key = html_escape(&truncate_secret(&settings.secret_key)),
    )
}

/// One volume heading, status line, and file list
fn volume_section(snapshot: &VolumeSnapshot) -> String {
    let status = match &snapshot.status {
        VolumeStatus::Mounted => r#"<span class="success">Successfully mounted</span>"#.to_string(),
        VolumeStatus::Empty => r#"<span class="warning">Mounted but empty</span>"#.to_string(),
        VolumeStatus::Error(err) => {
            format!(r#"<span class="error">Error: {}</span>"#, html_escape(err))
        }
    };

    let files = if snapshot.files.is_empty() {
        String::new()
    } else {
        let mut items = String::new();
        for file in &snapshot.files {
            let full_path = format!("{}/{}", snapshot.path, file);
            items.push_str(&format!(
                r#"
                <div class="file-item">
                    <span>{}</span>
                    <a href="/view-file?path={}" class="nav-link">View</a>
                </div>"#,
                html_escape(file),
                percent_encode(&full_path),
            ));
        }
        format!(
            r#"
            <div class="file-list">
                <h4>Files:</h4>{items}
            </div>"#
        )
    };

    format!(
        r#"
            <h3>{label} Volume</h3>
            <p><strong>Path:</strong> {path}</p>
            <p><strong>Status:</strong> {status}</p>{files}
"#,
        label = snapshot.kind.label(),
        path = html_escape(&snapshot.path),
    )
}

const FILE_VIEW_CSS: &str = r"
        body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; }
        pre { background-color: #f8f9fa; padding: 15px; border-radius: 5px; overflow-x: auto; }
        .nav-link {
            display: inline-block;
            padding: 8px 16px;
            background-color: #3498db;
            color: white;
            text-decoration: none;
            border-radius: 4px;
            font-weight: bold;
        }
";

/// Render a file's contents
pub fn file_view_page(path: &str, content: &str) -> String {
    let name = path.rsplit('/').next().unwrap_or(path);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>File: {name}</title>
    <style>{styles}</style>
</head>
<body>
    <h1>File: {name}</h1>
    <p>Path: {path}</p>
    <pre>{content}</pre>
    <a href="/" class="nav-link">Back to Home</a>
</body>
</html>
"#,
        styles = FILE_VIEW_CSS,
        name = html_escape(name),
        path = html_escape(path),
        content = html_escape(content),
    )
}

/// Render the create-file form
pub fn create_form_page() -> String {
    String::from(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Create File</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; padding: 20px; }
        .form-group { margin-bottom: 15px; }
        label { display: block; margin-bottom: 5px; }
        input[type="text"], textarea {
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
        }
        textarea { height: 200px; }
        button {
            padding: 8px 16px;
            background-color: #3498db;
            color: white;
            border: none;
            border-radius: 4px;
            cursor: pointer;
            font-weight: bold;
        }
        .nav-link {
            display: inline-block;
            padding: 8px 16px;
            background-color: #95a5a6;
            color: white;
            text-decoration: none;
            border-radius: 4px;
            font-weight: bold;
        }
    </style>
</head>
<body>
    <h1>Create a New File</h1>
    <p>This file will be saved to the mounted data volume.</p>

    <form method="post">
        <div class="form-group">
            <label for="filename">Filename:</label>
            <input type="text" id="filename" name="filename" required placeholder="example.txt">
        </div>

        <div class="form-group">
            <label for="content">Content:</label>
            <textarea id="content" name="content" required placeholder="Enter file content here..."></textarea>
        </div>

        <div class="form-group">
            <button type="submit">Create File</button>
            <a href="/" class="nav-link">Cancel</a>
        </div>
    </form>
</body>
</html>
"#,
    )
}

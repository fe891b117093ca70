//! Debug-property dumps for the selected adapter and device.

/// Logs adapter properties, limits and features.
pub fn log_adapter(adapter: &wgpu::Adapter) {
    let info = adapter.get_info();
    log::info!("adapter properties:");
    for line in adapter_info_lines(&info) {
        log::info!(" - {line}");
    }

    log::info!("adapter limits:");
    for line in limit_lines(&adapter.limits()) {
        log::info!(" - {line}");
    }

    log::debug!("adapter features: {:?}", adapter.features());
}

/// Logs device features and limits.
pub fn log_device(device: &wgpu::Device) {
    log::debug!("device features: {:?}", device.features());

    log::debug!("device limits:");
    for line in limit_lines(&device.limits()) {
        log::debug!(" - {line}");
    }
}

pub(crate) fn adapter_info_lines(info: &wgpu::AdapterInfo) -> Vec<String> {
    let mut lines = vec![
        format!("vendorID: {:#06x}", info.vendor),
        format!("deviceID: {:#06x}", info.device),
    ];
    if !info.name.is_empty() {
        lines.push(format!("name: {}", info.name));
    }
    if !info.driver.is_empty() {
        lines.push(format!("driver: {}", info.driver));
    }
    if !info.driver_info.is_empty() {
        lines.push(format!("driverDescription: {}", info.driver_info));
    }
    lines.push(format!("adapterType: {:?}", info.device_type));
    lines.push(format!("backendType: {:?}", info.backend));
    lines
}

pub(crate) fn limit_lines(limits: &wgpu::Limits) -> Vec<String> {
    vec![
        format!("maxTextureDimension1D: {}", limits.max_texture_dimension_1d),
        format!("maxTextureDimension2D: {}", limits.max_texture_dimension_2d),
        format!("maxTextureDimension3D: {}", limits.max_texture_dimension_3d),
        format!("maxTextureArrayLayers: {}", limits.max_texture_array_layers),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_lines_report_texture_limits() {
        let limits = wgpu::Limits::downlevel_defaults();
        let lines = limit_lines(&limits);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[1],
            format!("maxTextureDimension2D: {}", limits.max_texture_dimension_2d)
        );
        assert!(lines[3].starts_with("maxTextureArrayLayers: "));
    }
}

//! Parsers for metric command output.
//!
//! Each parser accepts the raw captured stdout of one command. Surrounding
//! whitespace is ignored; anything else that deviates from the expected column
//! layout is a [`MetricError::Parse`].

use super::{ContainerInfo, CpuReading, DiskReading, MemoryReading, MetricError};

/// `"37.5"` → 37.5 %.
pub fn parse_cpu(output: &str) -> Result<CpuReading, MetricError> {
    let text = output.trim();
    let percent = text
        .parse::<f32>()
        .map_err(|_| MetricError::parse(output, "expected a single float field"))?;
    Ok(CpuReading { percent })
}

/// `"512 25.0"` → 512 MB used, 25 %.
pub fn parse_memory(output: &str) -> Result<MemoryReading, MetricError> {
    let (used, percent) = two_fields(output)?;
    let used_mb = used
        .parse::<f32>()
        .map_err(|_| MetricError::parse(output, "used MB is not a number"))?;
    let percent = percent
        .parse::<f32>()
        .map_err(|_| MetricError::parse(output, "used percent is not a number"))?;
    Ok(MemoryReading { used_mb, percent })
}

/// `"20 45"` or `"20 45%"` → 20 GB used, 45 %.
pub fn parse_disk(output: &str) -> Result<DiskReading, MetricError> {
    let (used, percent) = two_fields(output)?;
    let used_gb = used
        .parse::<u64>()
        .map_err(|_| MetricError::parse(output, "used GB is not an integer"))?;
    let percent = percent
        .trim_end_matches('%')
        .parse::<u64>()
        .map_err(|_| MetricError::parse(output, "used percent is not an integer"))?;
    Ok(DiskReading {
        used_gb,
        percent: percent as f32,
    })
}

/// One container per line, `name|created|status`.
///
/// Lines that do not split into exactly three fields are skipped, so empty
/// output yields an empty list.
pub fn parse_containers(output: &str) -> Vec<ContainerInfo> {
    output
        .lines()
        .filter_map(|line| {
            let mut fields = line.split('|');
            let name = fields.next()?;
            let created_at = fields.next()?;
            let status = fields.next()?;
            if fields.next().is_some() || name.is_empty() {
                return None;
            }
            Some(ContainerInfo {
                name: name.to_string(),
                created_at: created_at.to_string(),
                status: status.to_string(),
            })
        })
        .collect()
}

/// `"\"Ubuntu 22.04.4 LTS\"\n"` → `Ubuntu 22.04.4 LTS`.
pub fn parse_os_version(output: &str) -> Result<String, MetricError> {
    let text = output.trim().trim_matches('"');
    if text.is_empty() {
        return Err(MetricError::parse(output, "empty OS description"));
    }
    Ok(text.to_string())
}

fn two_fields(output: &str) -> Result<(&str, &str), MetricError> {
    let mut fields = output.split_whitespace();
    match (fields.next(), fields.next(), fields.next()) {
        (Some(a), Some(b), None) => Ok((a, b)),
        _ => Err(MetricError::parse(output, "expected two whitespace-separated fields")),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cpu() {
        assert_eq!(parse_cpu("37.5\n").unwrap().percent, 37.5);
        assert_eq!(parse_cpu("  0 ").unwrap().percent, 0.0);
    }

    #[test]
    fn test_parse_cpu_rejects_garbage() {
        assert!(parse_cpu("").is_err());
        assert!(parse_cpu("37.5 12").is_err());
        assert!(parse_cpu("n/a").is_err());
    }

    #[test]
    fn test_parse_memory() {
        let reading = parse_memory("512 25.0").unwrap();
        assert_eq!(reading.used_mb, 512.0);
        assert_eq!(reading.percent, 25.0);
    }

    #[test]
    fn test_parse_memory_awk_precision() {
        // awk prints the percentage with full precision
        let reading = parse_memory("1873 47.9105").unwrap();
        assert_eq!(reading.used_mb, 1873.0);
        assert!((reading.percent - 47.9105).abs() < 1e-4);
    }

    #[test]
    fn test_parse_memory_wrong_field_count() {
        assert!(parse_memory("512").is_err());
        assert!(parse_memory("512 25.0 7").is_err());
    }

    #[test]
    fn test_parse_disk() {
        let reading = parse_disk("20 45\n").unwrap();
        assert_eq!(reading.used_gb, 20);
        assert_eq!(reading.percent, 45.0);
    }

    #[test]
    fn test_parse_disk_percent_suffix() {
        assert_eq!(parse_disk("20 45%").unwrap().percent, 45.0);
    }

    #[test]
    fn test_parse_disk_rejects_float_gb() {
        assert!(parse_disk("20.5 45").is_err());
    }

    #[test]
    fn test_parse_containers() {
        let output = "web|2024-05-01 10:00:00 +0000 UTC|Up 2 hours\n\
                      db|2024-05-01 09:00:00 +0000 UTC|Up 3 hours (healthy)\n";
        let containers = parse_containers(output);
        assert_eq!(containers.len(), 2);
        assert_eq!(containers[0].name, "web");
        assert_eq!(containers[0].status, "Up 2 hours");
        assert_eq!(containers[1].status, "Up 3 hours (healthy)");
    }

    #[test]
    fn test_parse_containers_empty() {
        assert!(parse_containers("").is_empty());
        assert!(parse_containers("\n").is_empty());
    }

    #[test]
    fn test_parse_containers_skips_malformed() {
        let output = "web|created|Up\nbroken line\nextra|a|b|c\ncache|created|Up 5 minutes";
        let names: Vec<_> = parse_containers(output).into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["web", "cache"]);
    }

    #[test]
    fn test_parse_os_version_strips_quotes() {
        assert_eq!(parse_os_version("\"Ubuntu 22.04.4 LTS\"\n").unwrap(), "Ubuntu 22.04.4 LTS");
        assert_eq!(parse_os_version("Debian GNU/Linux 12 (bookworm)").unwrap(), "Debian GNU/Linux 12 (bookworm)");
    }

    #[test]
    fn test_parse_os_version_empty() {
        assert!(parse_os_version("  \n").is_err());
    }
}

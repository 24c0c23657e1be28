use nodemap::errors::{NodeMapError, NodeMapResult};
use std::str::FromStr;

/// Generic parser for delimited strings that return fixed-size arrays
pub fn parse_delimited<T, const N: usize>(
    input: &str,
    delimiter: char,
    type_name: &str,
) -> NodeMapResult<[T; N]>
where
    T: Copy + Default + FromStr,
{
    let parts: Vec<&str> = input.split(delimiter).collect();
    if parts.len() != N {
        return Err(NodeMapError::InvalidArgument {
            reason: format!(
                "Invalid {type_name} format '{input}'. Expected {N} {delimiter}-separated values"
            ),
        });
    }

    let mut result = [T::default(); N];
    for (i, part) in parts.iter().enumerate() {
        result[i] = part.trim().parse().map_err(|_| NodeMapError::InvalidArgument {
            reason: format!("Invalid {type_name} value: '{part}'"),
        })?;
    }

    Ok(result)
}

/// Parse size string "WIDTHxHEIGHT" with validation
pub fn parse_size(size_str: &str) -> NodeMapResult<(u32, u32)> {
    let [width, height] = parse_delimited::<u32, 2>(size_str, 'x', "size")?;

    if width == 0 || height == 0 {
        return Err(NodeMapError::InvalidArgument {
            reason: "Width and height must be greater than 0".to_string(),
        });
    }

    if width > 2048 || height > 2048 {
        return Err(NodeMapError::InvalidArgument {
            reason: "Width and height must not exceed 2048".to_string(),
        });
    }

    Ok((width, height))
}

/// Parse degree bounds "MIN,MAX" with validation
pub fn parse_connection_bounds(bounds_str: &str) -> NodeMapResult<(u32, u32)> {
    let [min, max] = parse_delimited::<u32, 2>(bounds_str, ',', "connection bounds")?;

    if min == 0 {
        return Err(NodeMapError::InvalidArgument {
            reason: "Every node needs room for at least one connection".to_string(),
        });
    }

    if min > max {
        return Err(NodeMapError::InvalidArgument {
            reason: "Minimum connections must be less than or equal to maximum connections"
                .to_string(),
        });
    }

    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("64x64").unwrap(), (64, 64));
        assert_eq!(parse_size("128x256").unwrap(), (128, 256));
        assert_eq!(parse_size("1x1").unwrap(), (1, 1));

        assert!(parse_size("64").is_err());
        assert!(parse_size("0x64").is_err());
        assert!(parse_size("3000x64").is_err());
        assert!(parse_size("axb").is_err());
    }

    #[test]
    fn test_parse_connection_bounds() {
        assert_eq!(parse_connection_bounds("1,3").unwrap(), (1, 3));
        assert_eq!(parse_connection_bounds("2, 2").unwrap(), (2, 2));

        assert!(parse_connection_bounds("3").is_err());
        assert!(parse_connection_bounds("0,3").is_err());
        assert!(parse_connection_bounds("4,2").is_err());
    }
}

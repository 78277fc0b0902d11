//! Robot check that the converter screen renders all three converters.
//!
//! Run with:
//! ```bash
//! cargo run --package tempconv-demo --example robot_temperature_converter --features robot-app
//! ```

use cranpose::{AppLauncher, SemanticElement};
use tempconv_core::{labels, TemperatureScale};
use tempconv_demo::app::converter_app;
use tempconv_demo::config::DemoConfig;
use std::time::Duration;

fn find_element_by_text<'a>(
    elements: &'a [SemanticElement],
    text: &str,
) -> Option<&'a SemanticElement> {
    for elem in elements {
        if elem.text.as_deref() == Some(text) {
            return Some(elem);
        }
        if let Some(found) = find_element_by_text(&elem.children, text) {
            return Some(found);
        }
    }
    None
}

fn expected_texts() -> Vec<String> {
    vec![
        labels::STATEFUL_CONVERTER.to_string(),
        labels::STATELESS_CONVERTER.to_string(),
        labels::TWO_WAY_CONVERTER.to_string(),
        labels::ENTER_CELSIUS.to_string(),
        labels::enter_temperature(TemperatureScale::Fahrenheit),
        labels::temperature_fahrenheit(""),
    ]
}

fn main() {
    env_logger::init();
    let config = DemoConfig {
        headless: true,
        ..DemoConfig::from_env()
    };
    println!("=== Temperature Converter Robot Test ===");
    println!("Window size: {}x{}", config.width, config.height);

    AppLauncher::new()
        .with_title(config.title.clone())
        .with_size(config.width, config.height)
        .with_headless(config.headless)
        .with_test_driver(|robot| {
            std::thread::sleep(Duration::from_millis(400));
            robot.wait_for_idle().ok();

            let mut issues = Vec::new();
            if let Ok(semantics) = robot.get_semantics() {
                for text in expected_texts() {
                    if find_element_by_text(&semantics, &text).is_none() {
                        issues.push(format!("missing text \"{text}\""));
                    } else {
                        println!("✓ found \"{text}\"");
                    }
                }
            } else {
                issues.push("Failed to fetch semantics".to_string());
            }

            if !issues.is_empty() {
                println!("\n=== FAILURE ===");
                for issue in &issues {
                    println!("✗ {issue}");
                }
                robot.exit().ok();
                std::process::exit(1);
            }

            println!("\n=== SUCCESS ===");
            robot.exit().ok();
        })
        .run(converter_app);
}

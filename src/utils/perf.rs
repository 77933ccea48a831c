#[macro_export]
macro_rules! trace_time {
    // $threshold_millis: Enter 500 for 0.5s, 2000 for 2s, etc.
    ($name:expr, $threshold_millis:expr, $block:block) => {{
        if $crate::config::DF.log_performance {
            let start = $crate::utils::AppInstant::now();
            let result = $block;
            let millis = start.elapsed().as_millis();
            if millis > $threshold_millis {
                let mode = if cfg!(debug_assertions) {
                    "DEBUG"
                } else {
                    "RELEASE"
                };
                log::warn!(
                    "🐢 SLOW [{}]: '{}' took {}ms (Threshold: {}ms)",
                    mode,
                    $name,
                    millis,
                    $threshold_millis
                );
            }
            result
        } else {
            $block
        }
    }};
}

use shared::pages::ChartPoint;
use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub points: Vec<ChartPoint>,
    /// Largest value across both series.
    pub peak: u64,
}

/// Bar height as a percentage of the tallest bar.
fn bar_height(value: u64, peak: u64) -> AttrValue {
    let percent = if peak == 0 {
        0
    } else {
        value.saturating_mul(100) / peak
    };
    AttrValue::from(format!("height: {percent}%"))
}

/// Grouped monthly bars: preceptors and students side by side.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    html! {
        <div class="rounded-md bg-white p-6 shadow">
            <div class="mb-4 flex items-center justify-between">
                <h3 class="text-lg font-semibold">{"Preceptors vs Students"}</h3>
                <div class="flex gap-4 text-sm text-gray-500">
                    <span class="flex items-center gap-1">
                        <span class="h-3 w-3 rounded-sm bg-cauhec-red"></span>{"Preceptors"}
                    </span>
                    <span class="flex items-center gap-1">
                        <span class="h-3 w-3 rounded-sm bg-gray-400"></span>{"Students"}
                    </span>
                </div>
            </div>
            <div class="flex h-64 items-end gap-2">
                { for props.points.iter().map(|point| html! {
                    <div class="flex h-full flex-1 flex-col items-center justify-end">
                        <div class="flex h-full w-full items-end justify-center gap-0.5">
                            <div
                                class="w-1/2 rounded-t bg-cauhec-red"
                                style={bar_height(point.preceptors, props.peak)}
                                title={format!("{} preceptors", point.preceptors)}
                            ></div>
                            <div
                                class="w-1/2 rounded-t bg-gray-400"
                                style={bar_height(point.students, props.peak)}
                                title={format!("{} students", point.students)}
                            ></div>
                        </div>
                        <span class="mt-2 text-xs text-gray-500">{ &point.month[..3] }</span>
                    </div>
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_height_scales_to_peak() {
        assert_eq!(bar_height(40, 40).as_str(), "height: 100%");
        assert_eq!(bar_height(10, 40).as_str(), "height: 25%");
        assert_eq!(bar_height(5, 0).as_str(), "height: 0%");
    }
}

use yew::prelude::*;

const BAR_WIDTH: u32 = 28;
const BAR_GAP: u32 = 6;
const GROUP_GAP: u32 = 24;
const VALUE_BAND: u32 = 14;
const LABEL_BAND: u32 = 18;

/// One series of values, drawn as a bar per label group.
#[derive(Clone, PartialEq)]
pub struct ChartSeries {
    pub name: AttrValue,
    pub fill: AttrValue,
    pub values: Vec<u32>,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub labels: Vec<AttrValue>,
    pub series: Vec<ChartSeries>,
    #[prop_or(160)]
    pub height: u32,
}

/// Height of one bar inside the drawable span. Safe when every value is
/// zero: the chart then draws an empty baseline instead of dividing by zero.
fn scaled(value: u32, max: u32, span: u32) -> u32 {
    if max == 0 { 0 } else { value * span / max }
}

/// A grouped SVG bar chart: one group per label, one bar per series.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props
        .series
        .iter()
        .flat_map(|series| series.values.iter())
        .copied()
        .max()
        .unwrap_or(0);
    let span = props.height.saturating_sub(VALUE_BAND + LABEL_BAND);
    let bars_width = (props.series.len() as u32 * (BAR_WIDTH + BAR_GAP)).saturating_sub(BAR_GAP);
    let group_width = bars_width + GROUP_GAP;
    let width = (props.labels.len() as u32 * group_width).max(group_width);

    html! {
        <div>
            <svg
                viewBox={format!("0 0 {width} {}", props.height)}
                width={width.to_string()}
                height={props.height.to_string()}
            >
            {
                props.labels.iter().enumerate().map(|(group, label)| {
                    let group_x = group as u32 * group_width + GROUP_GAP / 2;
                    html! {
                        <g>
                        {
                            props.series.iter().enumerate().map(|(idx, series)| {
                                let value = series.values.get(group).copied().unwrap_or(0);
                                let bar = scaled(value, max, span);
                                let x = group_x + idx as u32 * (BAR_WIDTH + BAR_GAP);
                                let y = VALUE_BAND + (span - bar);
                                html! {
                                    <>
                                        <text
                                            x={(x + BAR_WIDTH / 2).to_string()}
                                            y={y.saturating_sub(3).to_string()}
                                            text-anchor="middle"
                                            class="text-xs fill-gray-600"
                                        >
                                            { value.to_string() }
                                        </text>
                                        <rect
                                            x={x.to_string()}
                                            y={y.to_string()}
                                            width={BAR_WIDTH.to_string()}
                                            height={bar.to_string()}
                                            rx="3"
                                            fill={series.fill.clone()}
                                        />
                                    </>
                                }
                            }).collect::<Html>()
                        }
                            <text
                                x={(group_x + bars_width / 2).to_string()}
                                y={(props.height - 4).to_string()}
                                text-anchor="middle"
                                class="text-xs fill-gray-600"
                            >
                                { label.clone() }
                            </text>
                        </g>
                    }
                }).collect::<Html>()
            }
            </svg>
            {
                if props.series.len() > 1 {
                    html! {
                        <div class="flex items-center space-x-4 mt-2">
                        {
                            props.series.iter().map(|series| html! {
                                <span class="flex items-center space-x-1 text-xs text-gray-600">
                                    <span
                                        class="inline-block w-3 h-3 rounded-sm"
                                        style={format!("background-color: {}", series.fill)}
                                    ></span>
                                    <span>{ series.name.clone() }</span>
                                </span>
                            }).collect::<Html>()
                        }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_is_proportional() {
        assert_eq!(scaled(10, 10, 100), 100);
        assert_eq!(scaled(5, 10, 100), 50);
        assert_eq!(scaled(0, 10, 100), 0);
    }

    #[test]
    fn zero_max_draws_an_empty_baseline() {
        assert_eq!(scaled(0, 0, 100), 0);
    }

    #[test]
    fn bars_never_exceed_the_span() {
        for value in 0..=7 {
            assert!(scaled(value, 7, 128) <= 128);
        }
    }
}

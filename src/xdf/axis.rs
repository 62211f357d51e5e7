use super::format::{format_float, format_hex};
use super::node::{XdfNode, XdfValue};
use crate::layout::conversions::Scalar;
use crate::layout::document::{AxisSpec, ElementSize, MapEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl AxisKind {
    pub fn id(self) -> &'static str {
        match self {
            AxisKind::X => "x",
            AxisKind::Y => "y",
        }
    }

    fn letter(self) -> &'static str {
        match self {
            AxisKind::X => "X",
            AxisKind::Y => "Y",
        }
    }
}

/// `mmedtypeflags`: bit 1 is always set, bit 0 marks signed data.
fn type_flags(signed: bool) -> XdfValue {
    XdfValue::Hex(0x02 | i128::from(signed))
}

/// Image address of `address` once the base offset is removed. Never overflows.
pub(super) fn translate(address: i64, base_offset: i64) -> i128 {
    i128::from(address) - i128::from(base_offset)
}

fn stride_bits(stride_bytes: f64) -> i64 {
    (stride_bytes * 8.0) as i64
}

/// Stride field value; zero means elements are packed back to back.
fn extra_stride(stride_bits: i64, element_bits: i64) -> i64 {
    if stride_bits > element_bits {
        stride_bits
    } else {
        0
    }
}

fn math(factor: f64, addition: f64) -> XdfNode {
    let equation = format!(
        "(( {} * X) + {} )",
        format_float(factor),
        format_float(addition)
    );
    XdfNode::new("MATH")
        .attr("equation", equation)
        .child(XdfNode::new("VAR").attr("id", "X"))
}

/// Display bounds: explicit values are kept as written, missing ones come from the element range.
fn bounds(
    element: ElementSize,
    signed: bool,
    min: Option<&Scalar>,
    max: Option<&Scalar>,
) -> [XdfNode; 2] {
    let (low, high) = element.range(signed);
    let pick = |explicit: Option<&Scalar>, computed: f64| {
        explicit.map_or(XdfValue::Float(computed), |s| XdfValue::Text(s.to_string()))
    };
    [
        XdfNode::text_element("min", pick(min, low)),
        XdfNode::text_element("max", pick(max, high)),
    ]
}

fn trimmed(value: Option<&Scalar>) -> Option<String> {
    let text = value?.to_string().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// Builds an x or y axis. Returns `None` when the table has no such axis.
pub fn xy_axis(
    kind: AxisKind,
    spec: Option<&AxisSpec>,
    base_offset: i64,
    table_id: &str,
) -> Option<XdfNode> {
    let spec = spec?;
    let element = spec.element_size();
    let element_bits = element.bits();
    let address = spec
        .address
        .map(|address| translate(address, base_offset) + i128::from(spec.skip_bytes()));

    let unique_id = match address {
        Some(address) => format_hex(address),
        None => format!("{table_id}_{}_axis", kind.id()),
    };
    let title = spec
        .label()
        .unwrap_or_else(|| format!("Axis {}", kind.letter()));
    let stride = extra_stride(stride_bits(spec.stride_bytes()), element_bits);
    let size = spec.size();

    let mut axis = XdfNode::new("XDFAXIS")
        .attr("id", kind.id())
        .attr("uniqueid", unique_id)
        .child(XdfNode::text_element("title", title.as_str()));

    let mut embedded = XdfNode::new("EMBEDDEDDATA")
        .attr("mmedelementsizebits", element_bits)
        .attr("mmedtypeflags", type_flags(spec.signed));

    if let Some(address) = address {
        embedded = embedded.attr("mmedaddress", XdfValue::Hex(address));
        axis = axis.child(XdfNode::new("embedinfo").attr("type", 1_i64));
    }

    embedded = match kind {
        AxisKind::X => embedded
            .attr("mmedcolcount", size)
            .attr("mmedrowcount", 1_i64)
            .attr("mmedminorstridebits", stride)
            .attr("mmedmajorstridebits", 0_i64),
        AxisKind::Y => embedded
            .attr("mmedrowcount", size)
            .attr("mmedcolcount", 1_i64)
            .attr("mmedmajorstridebits", stride)
            .attr("mmedminorstridebits", 0_i64),
    };

    if size > 0 {
        axis = axis.child(embedded);
    }

    let units = match &spec.units {
        Some(units) => trimmed(Some(units)).unwrap_or_else(|| format!("{}-units", kind.id())),
        None => title.clone(),
    };

    let axis = axis
        .child(XdfNode::text_element("indexcount", size))
        .child(XdfNode::text_element("datatype", i64::from(spec.signed)))
        .child(XdfNode::text_element("unittype", 0_i64).attr("label", units))
        .child(XdfNode::new("DALINK").attr("index", 0_i64))
        .child(math(spec.factor(), spec.addition()))
        .child(XdfNode::text_element("decimalpl", spec.precision()))
        .children(bounds(
            element,
            spec.signed,
            spec.min_val.as_ref(),
            spec.max_val.as_ref(),
        ));

    Some(axis)
}

/// Row-to-row distance of the table data in bits; zero for contiguous rows.
fn row_stride_bits(entry: &MapEntry) -> i128 {
    let stride_bytes = entry.stride_bytes();
    let element_stride_bits = stride_bits(stride_bytes);
    let line_skip = entry.line_skip_bytes();
    let width = entry.width();

    if line_skip > 0.0 {
        ((width as f64 * stride_bytes + line_skip) * 8.0) as i128
    } else if element_stride_bits > entry.element_size().bits() && width > 1 {
        i128::from(width) * i128::from(element_stride_bits)
    } else {
        0
    }
}

/// Builds the value plane of a table. Unlike x/y it carries no `uniqueid` and ends with `outputtype`.
pub fn z_axis(entry: &MapEntry, base_offset: i64) -> XdfNode {
    let element = entry.element_size();
    let element_bits = element.bits();
    let address = entry
        .address
        .map_or(0, |address| translate(address, base_offset));
    let title = trimmed(entry.name.as_ref()).unwrap_or_else(|| "Table Data".to_string());
    let units = trimmed(entry.z_units.as_ref()).unwrap_or_else(|| "Value".to_string());

    let embedded = XdfNode::new("EMBEDDEDDATA")
        .attr("mmedaddress", XdfValue::Hex(address))
        .attr("mmedelementsizebits", element_bits)
        .attr("mmedmajorstridebits", row_stride_bits(entry))
        .attr(
            "mmedminorstridebits",
            extra_stride(stride_bits(entry.stride_bytes()), element_bits),
        )
        .attr("mmedtypeflags", type_flags(entry.z_signed))
        .attr("mmedcolcount", entry.width())
        .attr("mmedrowcount", entry.height());

    XdfNode::new("XDFAXIS")
        .attr("id", "z")
        .child(XdfNode::text_element("title", title))
        .child(embedded)
        .child(math(entry.factor(), entry.addition()))
        .child(XdfNode::text_element("decimalpl", entry.precision()))
        .child(XdfNode::text_element("units", units))
        .children(bounds(
            element,
            entry.z_signed,
            entry.z_min_val.as_ref(),
            entry.z_max_val.as_ref(),
        ))
        .child(XdfNode::text_element("outputtype", 1_i64))
}

//! Documented-code samples shared by integration tests.

/// Passes every check.
#[allow(dead_code)]
pub const COMPLETE_DOC: &str = r#"def apply_discount(price: float, rate: float) -> float:
    """Apply a fractional discount to a price.

    Args:
        price: Original price.
        rate: Discount between 0 and 1.

    Returns:
        The discounted price.

    Example:
        >>> apply_discount(100.0, 0.25)
        75.0
    """
    return price * (1 - rate)
"#;

/// Passes every required check but has no example.
#[allow(dead_code)]
pub const NO_EXAMPLE_DOC: &str = r#"def add(a: int, b: int) -> int:
    """Add two numbers together.

    Args:
        a: First number.
        b: Second number.

    Returns:
        Sum of a and b.
    """
    return a + b
"#;

/// No documentation at all.
#[allow(dead_code)]
pub const UNDOCUMENTED: &str = "def add(a, b): return a + b\n";

/// Typical generator output: fenced, one documented and one bare function.
#[allow(dead_code)]
pub const FENCED_MODULE: &str = r#"```python
def double(x: int) -> int:
    """Double a value.

    Args:
        x: Value.

    Returns:
        Twice x.

    Example:
        >>> double(2)
        4
    """
    return x * 2


def half(x):
    return x / 2
```
"#;

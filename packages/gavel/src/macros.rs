/// Returns `Ok(())` when the assertion holds, otherwise logs the error code and
/// the line it was raised on and returns `Err($err)`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                Err(error_code)
            }
        }
    };
    (
        $env:expr,
        $assert:expr,
        $err:expr,
        $($arg:tt)+
    ) => {
        {
            if ($assert) {
                Ok(())
            } else {
                let error_code: $crate::error::ErrorCode = $err;
                ::soroban_sdk::log!($env, "Error {} thrown at line {}", error_code as u32, line!());
                ::soroban_sdk::log!($env, $($arg)+);
                Err(error_code)
            }
        }
    };
}

#[macro_export]
macro_rules! safe_increment {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_add($value).ok_or($crate::error::ErrorCode::MathOverflow)?
    }};
}

#[macro_export]
macro_rules! safe_decrement {
    ($struct:expr, $value:expr) => {{
        $struct = $struct.checked_sub($value).ok_or($crate::error::ErrorCode::MathOverflow)?
    }};
}

#[cfg(test)]
mod tests {
    use crate::error::{ ErrorCode, GavelResult };

    fn bump(mut value: u32, delta: u32) -> GavelResult<u32> {
        safe_increment!(value, delta);
        Ok(value)
    }

    fn drain(mut value: i128, delta: i128) -> GavelResult<i128> {
        safe_decrement!(value, delta);
        Ok(value)
    }

    #[test]
    fn safe_math_reports_overflow() {
        assert_eq!(bump(1, 2), Ok(3));
        assert_eq!(bump(u32::MAX, 1), Err(ErrorCode::MathOverflow));
        assert_eq!(drain(5, 5), Ok(0));
        assert_eq!(drain(i128::MIN, 1), Err(ErrorCode::MathOverflow));
    }
}

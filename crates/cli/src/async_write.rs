/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

/// Writes formatted text to the runtime output writer and flushes it.
/// $writer must be AsyncWrite + Unpin
#[macro_export]
macro_rules! async_write {
    ($writer:expr, $($arg:tt)*) => {{
        use tokio::io::AsyncWriteExt;
        let formatted = format!($($arg)*);
        match $writer.write_all(formatted.as_bytes()).await {
            Ok(()) => $writer.flush().await,
            Err(e) => Err(e),
        }
    }};
}

/// Same as async_write! with a trailing newline.
#[macro_export]
macro_rules! async_writeln {
    ($writer:expr) => {{
        use tokio::io::AsyncWriteExt;
        match $writer.write_all(b"\n").await {
            Ok(()) => $writer.flush().await,
            Err(e) => Err(e),
        }
    }};
    ($writer:expr, $($arg:tt)+) => {{
        use tokio::io::AsyncWriteExt;
        let mut formatted = format!($($arg)+);
        formatted.push('\n');
        match $writer.write_all(formatted.as_bytes()).await {
            Ok(()) => $writer.flush().await,
            Err(e) => Err(e),
        }
    }};
}

/// Renders a prettytable table as csv into the output writer.
#[macro_export]
macro_rules! async_write_table_as_csv {
    ($writer:expr, $table:expr) => {{
        use tokio::io::AsyncWriteExt;
        let mut output = Vec::default();
        $table
            .to_csv(&mut output)
            .map_err(|e| ::ucp::cli::RadCliError::GenericError(e.to_string()))?;
        match $writer.write_all(output.as_slice()).await {
            Ok(()) => $writer.flush().await,
            Err(e) => Err(e),
        }
    }};
}

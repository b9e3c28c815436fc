// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::error::Error;

pub(crate) fn ensure_non_empty(len: usize, operation: &'static str) -> Result<(), Error> {
    if len > 0 {
        Ok(())
    } else {
        tracing::debug!(operation, "statistic requested on an empty sequence");
        Err(Error::empty_sequence(operation))
    }
}

pub(crate) fn ensure_positive(name: &'static str, actual: usize) -> Result<(), Error> {
    if actual > 0 {
        Ok(())
    } else {
        Err(
            Error::invalid_argument(format!("{name} must be positive; got {actual}"))
                .with_context("argument", name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty(1, "min").is_ok());
        let err = ensure_non_empty(0, "min").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySequence);
    }

    #[test]
    fn test_ensure_positive() {
        assert!(ensure_positive("size", 3).is_ok());
        let err = ensure_positive("size", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "size must be positive; got 0");
    }
}
